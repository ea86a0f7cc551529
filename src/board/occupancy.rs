//! Occupancy and threat predicates shared by the move generators.

use super::{Color, Coord, GameState};

impl GameState {
    /// True iff `coord` is on the board and holds no piece.
    #[inline]
    #[must_use]
    pub fn empty_space(&self, coord: Coord) -> bool {
        matches!(self.board.cell(coord), Some(None))
    }

    /// True iff `coord` holds a piece of the side opposing `colour`, or is
    /// the en-passant target and that target lies on
    /// [`Color::en_passant_capture_row`] for `colour`.
    ///
    /// Off-board coordinates are never hostile.
    #[must_use]
    pub fn is_hostile_target(&self, coord: Coord, colour: Color) -> bool {
        match self.board.cell(coord) {
            None => false,
            Some(Some((owner, _))) if owner != colour => true,
            Some(_) => self.en_passant.is_some_and(|target| {
                target == coord && target.y == colour.en_passant_capture_row()
            }),
        }
    }

    /// Empty, or capturable by `colour`.
    #[inline]
    pub(crate) fn is_open_for(&self, coord: Coord, colour: Color) -> bool {
        self.empty_space(coord) || self.is_hostile_target(coord, colour)
    }
}
