//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//!
//! let state = GameState::new();
//! assert!(state.empty_space(Coord::new(4, 4)));
//! ```

pub use super::{
    diagonal_path, straight_path, Board, CastlingRights, Color, Coord, FenError, GameState,
    GameStateBuilder, Move, MoveList, Piece, SquareError,
};
