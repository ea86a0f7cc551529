pub mod board;

pub use board::{Board, Color, Coord, GameState, Move, MoveList, Piece};
