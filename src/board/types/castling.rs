//! Castling rights type.
//!
//! Rights are bookkeeping only: nothing here checks that the king or rook
//! is still on its home square.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN letters in emission order, paired with their bit.
pub(crate) const CASTLING_LETTERS: [(char, u8); 4] = [
    ('K', CASTLE_WHITE_K),
    ('Q', CASTLE_WHITE_Q),
    ('k', CASTLE_BLACK_K),
    ('q', CASTLE_BLACK_Q),
];

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Create from raw bitmask value; bits above the four rights are dropped.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    /// Rights named by the letters of a FEN castling field.
    ///
    /// Any of `K`, `Q`, `k`, `q` present sets that right; every other
    /// character (including `-`) is ignored.
    #[must_use]
    pub fn from_fen_field(field: &str) -> Self {
        let bits = CASTLING_LETTERS
            .iter()
            .filter(|(letter, _)| field.contains(*letter))
            .fold(0, |acc, (_, bit)| acc | bit);
        CastlingRights(bits)
    }

    /// FEN castling field: present rights in `KQkq` order, or `-`.
    #[must_use]
    pub fn to_fen_field(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        CASTLING_LETTERS
            .iter()
            .filter(|(_, bit)| self.0 & bit != 0)
            .map(|(letter, _)| *letter)
            .collect()
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
