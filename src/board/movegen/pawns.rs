use super::super::path::straight_path;
use super::super::{Color, Coord, GameState, MoveList};

impl GameState {
    /// Destinations of a pawn of `colour` standing on `from`.
    ///
    /// Pushes need every square on the straight path to be empty; the
    /// double push is only offered from the home row. Diagonal steps are
    /// kept when they land on a hostile piece or a capturable en-passant
    /// target. No promotion handling.
    #[must_use]
    pub fn generate_pawn_moves(&self, from: Coord, colour: Color) -> MoveList {
        let mut moves = MoveList::new();
        if !from.check_bounds() {
            return moves;
        }
        let dir = colour.pawn_direction();

        let single = from.offset(0, dir);
        if self.path_is_clear(from, single) {
            moves.push(single);
        }

        if from.y == colour.pawn_home_row() {
            let double = from.offset(0, 2 * dir);
            if self.path_is_clear(from, double) {
                moves.push(double);
            }
        }

        for dx in [-1, 1] {
            let target = from.offset(dx, dir);
            if target.check_bounds() && self.is_hostile_target(target, colour) {
                moves.push(target);
            }
        }
        moves
    }

    fn path_is_clear(&self, from: Coord, to: Coord) -> bool {
        let mut path = straight_path(from, to);
        path.len() > 0 && path.all(|sq| self.empty_space(sq))
    }
}
