//! Fluent builder for constructing game states.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Color, Coord, GameStateBuilder, Piece};
//!
//! let state = GameStateBuilder::new()
//!     .piece(Coord::new(4, 7), Color::White, Piece::King)
//!     .piece(Coord::new(4, 0), Color::Black, Piece::King)
//!     .piece(Coord::new(0, 6), Color::White, Piece::Pawn)
//!     .side_to_move(Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.encode(), "4k3/8/8/8/8/8/P7/4K3 b - - 0 1");
//! ```

use super::error::SquareError;
use super::{Board, CastlingRights, Color, Coord, GameState, Piece};

/// A fluent builder for constructing `GameState` values.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    pieces: Vec<(Coord, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Coord>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a builder for an empty board with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::starting_position().pieces().collect();
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever was on that square.
    #[must_use]
    pub fn piece(mut self, square: Coord, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Coord) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace the castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Coord) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the state.
    ///
    /// Fails if any piece or the en-passant target lies off the board.
    pub fn build(self) -> Result<GameState, SquareError> {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set(square, Some((color, piece)))?;
        }
        if let Some(target) = self.en_passant_target {
            if !target.check_bounds() {
                return Err(SquareError::OutOfBounds {
                    x: target.x,
                    y: target.y,
                });
            }
        }

        Ok(GameState {
            board,
            side_to_move: self.side_to_move,
            castling: self.castling_rights,
            en_passant: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        })
    }
}
