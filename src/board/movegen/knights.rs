use super::super::{Color, Coord, GameState, MoveList};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl GameState {
    #[must_use]
    pub fn generate_knight_moves(&self, from: Coord, colour: Color) -> MoveList {
        if !from.check_bounds() {
            return MoveList::new();
        }
        KNIGHT_OFFSETS
            .iter()
            .map(|&step| from + step)
            .filter(|&to| to.check_bounds() && self.is_open_for(to, colour))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Piece};

    #[test]
    fn test_knight_in_centre_of_empty_board() {
        let state = GameState::new().with_board(Board::empty());
        assert_eq!(
            state
                .generate_knight_moves(Coord::new(4, 4), Color::White)
                .len(),
            8
        );
    }

    #[test]
    fn test_knight_in_corner() {
        let state = GameState::new().with_board(Board::empty());
        let moves = state.generate_knight_moves(Coord::new(0, 0), Color::Black);
        assert_eq!(moves.sorted(), vec![Coord::new(1, 2), Coord::new(2, 1)]);
    }

    #[test]
    fn test_knight_from_start_square() {
        let state = GameState::new();
        let moves = state.generate_knight_moves(Coord::new(1, 7), Color::White);
        assert_eq!(moves.sorted(), vec![Coord::new(0, 5), Coord::new(2, 5)]);
    }

    #[test]
    fn test_knight_captures_but_skips_own_pieces() {
        let mut board = Board::empty();
        board
            .set(Coord::new(5, 6), Some((Color::Black, Piece::Queen)))
            .unwrap();
        board
            .set(Coord::new(6, 5), Some((Color::White, Piece::Pawn)))
            .unwrap();
        let state = GameState::new().with_board(board);
        let moves = state.generate_knight_moves(Coord::new(4, 4), Color::White);
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(Coord::new(5, 6)));
        assert!(!moves.contains(Coord::new(6, 5)));
    }
}
