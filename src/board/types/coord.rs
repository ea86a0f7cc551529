//! Board coordinates.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 8;

/// A square on the board as `(x, y)`.
///
/// `x` is the file index (0 = file a) and `y` is the row index into the
/// board grid, where row 0 is the first rank group of a FEN board field
/// (rank 8). Values outside `[0, 8)` are representable so that offset
/// arithmetic can run ahead of the bounds check; use [`Coord::check_bounds`]
/// before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// True iff both axes lie in `[0, 8)`.
    #[inline]
    #[must_use]
    pub const fn check_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Shift by `(dx, dy)` without any bounds check. Saturates at the
    /// `i32` limits, so an off-board coordinate stays off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Coord::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// `(row, column)` indices into the board grid, if on the board.
    #[inline]
    #[must_use]
    pub(crate) fn grid_index(self) -> Option<(usize, usize)> {
        if self.check_bounds() {
            Some((self.y as usize, self.x as usize))
        } else {
            None
        }
    }

    /// Iterate every on-board coordinate, row 0 first.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }
}

impl Add<(i32, i32)> for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, (dx, dy): (i32, i32)) -> Coord {
        self.offset(dx, dy)
    }
}

/// Algebraic notation, e.g. `e3` for `Coord { x: 4, y: 5 }`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.check_bounds() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        let file = (b'a' + self.x as u8) as char;
        write!(f, "{}{}", file, BOARD_SIZE - self.y)
    }
}

impl TryFrom<(i32, i32)> for Coord {
    type Error = SquareError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        let coord = Coord::new(x, y);
        if coord.check_bounds() {
            Ok(coord)
        } else {
            Err(SquareError::OutOfBounds { x, y })
        }
    }
}

impl FromStr for Coord {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let x = match bytes[0] {
            b @ b'a'..=b'h' => i32::from(b - b'a'),
            _ => return Err(invalid()),
        };
        let y = match bytes[1] {
            b @ b'1'..=b'8' => BOARD_SIZE - i32::from(b - b'0'),
            _ => return Err(invalid()),
        };
        Ok(Coord::new(x, y))
    }
}
