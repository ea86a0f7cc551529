use super::super::{Color, Coord, GameState, MoveList};

const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl GameState {
    /// One-step king moves. Castling is not generated; the rights in
    /// [`GameState::castling_rights`] are bookkeeping only.
    #[must_use]
    pub fn generate_king_moves(&self, from: Coord, colour: Color) -> MoveList {
        if !from.check_bounds() {
            return MoveList::new();
        }
        KING_OFFSETS
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
    fn test_king_on_empty_board() {
        let state = GameState::new().with_board(Board::empty());
        assert_eq!(
            state
                .generate_king_moves(Coord::new(3, 3), Color::White)
                .len(),
            8
        );
        assert_eq!(
            state
                .generate_king_moves(Coord::new(7, 7), Color::White)
                .len(),
            3
        );
    }

    #[test]
    fn test_king_boxed_in_at_start() {
        let state = GameState::new();
        assert!(state
            .generate_king_moves(Coord::new(4, 7), Color::White)
            .is_empty());
    }

    #[test]
    fn test_no_castling_even_with_rights() {
        let state = GameState::decode("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = state.generate_king_moves(Coord::new(4, 7), Color::White);
        assert!(!moves.contains(Coord::new(6, 7)));
        assert!(!moves.contains(Coord::new(2, 7)));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn test_king_captures_adjacent_enemy() {
        let mut board = Board::empty();
        board
            .set(Coord::new(4, 3), Some((Color::White, Piece::Rook)))
            .unwrap();
        let state = GameState::new().with_board(board);
        let moves = state.generate_king_moves(Coord::new(4, 4), Color::Black);
        assert!(moves.contains(Coord::new(4, 3)));
        assert_eq!(moves.len(), 8);
    }
}
