//! Board model, pseudo-legal move generation and the FEN state codec.
//!
//! Uses an 8x8 grid of optional pieces indexed by `Coord { x, y }`, where
//! row 0 is rank 8. Generators are pure reads of a `GameState`.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Coord, GameState};
//!
//! let state = GameState::decode("").unwrap();
//! let moves = state.moves_from(Coord::new(0, 6));
//! assert_eq!(moves.len(), 2);
//! println!("Starting position has {} pseudo-legal moves", state.pseudo_moves().len());
//! ```

mod builder;
pub mod codes;
mod error;
mod fen;
mod movegen;
mod occupancy;
pub mod path;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameStateBuilder;
pub use error::{ClockField, FenError, SquareError};
pub use fen::START_FEN;
pub use movegen::SliderType;
pub use path::{diagonal_path, straight_path, Path};
pub use state::{Board, Cell, GameState};
pub use types::{
    CastlingRights, Color, Coord, Move, MoveList, MoveListIntoIter, Piece, BOARD_SIZE,
};
