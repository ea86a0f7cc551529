//! Core board types.
//!
//! - `Coord` - an `(x, y)` board coordinate with bounds checking
//! - `Piece` and `Color` - piece kinds and sides
//! - `Move` and `MoveList` - destination sets produced by the generators
//! - `CastlingRights` - castling bookkeeping

mod castling;
mod coord;
mod moves;
mod piece;

pub use castling::CastlingRights;
pub use coord::{Coord, BOARD_SIZE};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
