use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SquareError;
use super::{CastlingRights, Color, Coord, Piece};

/// Content of one board cell: empty, or a piece of some color.
pub type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid, row-major by `y` then `x`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Cell; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting layout: black on rows 0-1, white on rows 6-7.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (x, &piece) in BACK_RANK.iter().enumerate() {
            board.squares[0][x] = Some((Color::Black, piece));
            board.squares[1][x] = Some((Color::Black, Piece::Pawn));
            board.squares[6][x] = Some((Color::White, Piece::Pawn));
            board.squares[7][x] = Some((Color::White, piece));
        }
        board
    }

    /// Cell at `coord`, or `None` when `coord` is off the board.
    #[inline]
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord.grid_index().map(|(row, col)| self.squares[row][col])
    }

    /// Piece at `coord`; `None` for empty or off-board squares.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Cell {
        self.cell(coord).flatten()
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), SquareError> {
        let (row, col) = coord.grid_index().ok_or(SquareError::OutOfBounds {
            x: coord.x,
            y: coord.y,
        })?;
        self.squares[row][col] = cell;
        Ok(())
    }

    /// Rows of cells, row 0 first.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.squares
    }

    /// Every occupied square with its piece, in row order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Color, Piece)> + '_ {
        Coord::all().filter_map(move |coord| {
            self.piece_at(coord)
                .map(|(color, piece)| (coord, color, piece))
        })
    }

    pub(crate) fn from_rows(squares: [[Cell; 8]; 8]) -> Self {
        Board { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', |(color, piece)| piece.to_fen_char(color)))
                .collect();
            writeln!(f, "    {line}")?;
        }
        write!(f, "}}")
    }
}

/// Full game state: board plus the side to move, castling rights,
/// en-passant target and move clocks.
///
/// States are plain values. Generators read a shared reference and never
/// mutate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Coord>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl GameState {
    /// The standard starting position with White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The square capturable en passant, if any.
    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Coord> {
        self.en_passant
    }

    /// Moves since the last pawn move or capture.
    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Copy of this state with a different board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Copy of this state with a different en-passant target.
    #[must_use]
    pub fn with_en_passant(mut self, target: Option<Coord>) -> Self {
        self.en_passant = target;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
