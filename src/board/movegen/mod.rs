//! Pseudo-legal move generation.
//!
//! Every generator takes the square a piece stands on and the colour it
//! moves for, and returns the squares it could move to: empty squares and
//! squares holding a hostile piece, subject to blocking along sliding
//! paths. Nothing here checks whether a move leaves the mover's own king
//! in check, and neither castling nor promotion moves are produced.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use sliders::SliderType;

use super::{Color, Coord, GameState, Move, MoveList, Piece};

impl GameState {
    /// Destinations of `piece` on `from`, moving for `colour`.
    ///
    /// The piece need not actually stand on `from`. An off-board `from`
    /// has no destinations.
    #[must_use]
    pub fn generate_piece_moves(&self, from: Coord, piece: Piece, colour: Color) -> MoveList {
        let moves = match piece {
            Piece::Pawn => self.generate_pawn_moves(from, colour),
            Piece::Knight => self.generate_knight_moves(from, colour),
            Piece::Bishop => self.generate_slider_moves(from, SliderType::Bishop, colour),
            Piece::Rook => self.generate_slider_moves(from, SliderType::Rook, colour),
            Piece::Queen => self.generate_slider_moves(from, SliderType::Queen, colour),
            Piece::King => self.generate_king_moves(from, colour),
        };
        #[cfg(feature = "logging")]
        log::trace!(
            "{colour} {piece:?} on {from}: {} destinations",
            moves.len()
        );
        moves
    }

    /// Destinations of whatever piece stands on `from`, moving for its own
    /// colour. Empty and off-board squares have none.
    #[must_use]
    pub fn moves_from(&self, from: Coord) -> MoveList {
        match self.board.piece_at(from) {
            Some((colour, piece)) => self.generate_piece_moves(from, piece, colour),
            None => MoveList::new(),
        }
    }

    /// All pseudo-legal moves for the side to move, in board order.
    #[must_use]
    pub fn pseudo_moves(&self) -> Vec<Move> {
        self.pseudo_moves_for(self.side_to_move)
    }

    /// All pseudo-legal moves for `colour`, whoever is to move.
    #[must_use]
    pub fn pseudo_moves_for(&self, colour: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, owner, piece) in self.board.pieces() {
            if owner != colour {
                continue;
            }
            let targets = self.generate_piece_moves(from, piece, colour);
            moves.extend(targets.into_iter().map(|to| Move::new(from, to)));
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_starting_position_move_count() {
        let state = GameState::new();
        // 16 pawn moves + 4 knight moves.
        assert_eq!(state.pseudo_moves().len(), 20);
        assert_eq!(state.pseudo_moves_for(Color::Black).len(), 20);
    }

    #[test]
    fn test_moves_from_reads_piece_and_colour() {
        let state = GameState::new();
        let knight = state.moves_from(Coord::new(6, 0));
        assert_eq!(knight.sorted(), vec![Coord::new(5, 2), Coord::new(7, 2)]);

        let pawn = state.moves_from(Coord::new(4, 6));
        assert_eq!(pawn.sorted(), vec![Coord::new(4, 4), Coord::new(4, 5)]);
    }

    #[test]
    fn test_moves_from_empty_or_off_board() {
        let state = GameState::new();
        assert!(state.moves_from(Coord::new(4, 4)).is_empty());
        assert!(state.moves_from(Coord::new(9, 4)).is_empty());
    }

    #[test]
    fn test_dispatch_matches_direct_generators() {
        let state = GameState::decode("8/8/3k4/8/3Q4/8/8/4K3 w - - 0 1").unwrap();
        let from = Coord::new(3, 4);
        assert_eq!(
            state.generate_piece_moves(from, Piece::Queen, Color::White),
            state.generate_queen_moves(from, Color::White)
        );
        assert_eq!(
            state.generate_piece_moves(from, Piece::Rook, Color::White),
            state.generate_rook_moves(from, Color::White)
        );
        assert_eq!(
            state.generate_piece_moves(from, Piece::Knight, Color::White),
            state.generate_knight_moves(from, Color::White)
        );
    }

    #[test]
    fn test_pseudo_moves_include_king_captures() {
        let state = GameState::decode("8/8/8/8/8/8/5q2/4K3 w - - 0 1").unwrap();
        let moves = state.pseudo_moves();
        assert!(moves.contains(&Move::new(Coord::new(4, 7), Coord::new(5, 6))));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn test_off_board_origin_has_no_destinations() {
        let state = GameState::new().with_board(Board::empty());
        for from in [
            Coord::new(i32::MAX, 0),
            Coord::new(0, i32::MIN),
            Coord::new(-1, 3),
            Coord::new(8, 8),
        ] {
            for piece in Piece::ALL {
                for colour in Color::BOTH {
                    assert!(
                        state.generate_piece_moves(from, piece, colour).is_empty(),
                        "{piece:?} at {from}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_pseudo_moves_on_empty_board() {
        let state = GameState::new().with_board(Board::empty());
        assert!(state.pseudo_moves().is_empty());
    }
}
