//! Squares between two aligned coordinates.
//!
//! Both generators return a [`Path`] that starts one step past `from` and
//! ends on `to`. Misaligned, identical or off-board endpoints yield an
//! empty path rather than an error.

use std::iter::FusedIterator;

use super::Coord;

/// Ordered walk from one step past an origin up to and including a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Path {
    next: Coord,
    step: (i32, i32),
    remaining: usize,
}

impl Path {
    const fn empty(from: Coord) -> Self {
        Path {
            next: from,
            step: (0, 0),
            remaining: 0,
        }
    }

    fn walk(from: Coord, step: (i32, i32), len: i32) -> Self {
        Path {
            next: from + step,
            step,
            remaining: len as usize,
        }
    }
}

impl Iterator for Path {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next = current + self.step;
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Path {}

impl FusedIterator for Path {}

/// Path along the rank or file shared by `from` and `to`.
#[must_use]
pub fn straight_path(from: Coord, to: Coord) -> Path {
    if !from.check_bounds() || !to.check_bounds() {
        return Path::empty(from);
    }
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    match (dx, dy) {
        (0, 0) => Path::empty(from),
        (0, _) => Path::walk(from, (0, dy.signum()), dy.abs()),
        (_, 0) => Path::walk(from, (dx.signum(), 0), dx.abs()),
        _ => Path::empty(from),
    }
}

/// Path along the diagonal joining `from` and `to`.
#[must_use]
pub fn diagonal_path(from: Coord, to: Coord) -> Path {
    if !from.check_bounds() || !to.check_bounds() {
        return Path::empty(from);
    }
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0 || dx.abs() != dy.abs() {
        return Path::empty(from);
    }
    Path::walk(from, (dx.signum(), dy.signum()), dx.abs())
}
