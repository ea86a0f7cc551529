//! Move types and destination lists.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A piece moving from one square to another.
///
/// Carries no capture or promotion flags: it is exactly one entry of a
/// generator's destination set, tagged with its origin.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Most destinations a single piece can have (a centralised queen has 27).
pub(crate) const MAX_DESTINATIONS: usize = 32;
const EMPTY_SLOT: Coord = Coord::new(0, 0);

/// Destination squares of one piece, with a fixed-size backing array.
///
/// Entries are unique. Pushing a square already present, or pushing past
/// capacity, leaves the list unchanged, so collecting an arbitrary
/// iterator keeps its first `MAX_DESTINATIONS` distinct squares.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Coord; MAX_DESTINATIONS],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_SLOT; MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, to: Coord) {
        if self.len == MAX_DESTINATIONS || self.contains(to) {
            return;
        }
        self.moves[self.len] = to;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Coord] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, to: Coord) -> bool {
        self.as_slice().contains(&to)
    }

    /// Destinations in ascending `(x, y)` order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Coord> {
        let mut out = self.as_slice().to_vec();
        out.sort_unstable();
        out
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for MoveList {
    /// Set equality: order of generation does not matter.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|&to| other.contains(to))
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl FromIterator<Coord> for MoveList {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for to in iter {
            list.push(to);
        }
        list
    }
}

/// Owning iterator over the destinations in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let to = self.list.moves[self.idx];
            self.idx += 1;
            Some(to)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Coord;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}
