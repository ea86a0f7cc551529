//! Legacy integer piece codes.
//!
//! Older encodings store a board as an 8x8 grid of small integers: `0` is
//! empty, `1..=6` are pawn, knight, bishop, rook, queen and king for Black,
//! and adding the White offset `8` gives the White piece (`9..=14`). `7`
//! and `15` are unused. This module is the only place that knows the
//! scheme.

use super::error::FenError;
use super::state::Cell;
use super::{Board, Color, Piece};

/// Code of an empty square.
pub const EMPTY_CODE: u8 = 0;

const WHITE_OFFSET: u8 = 8;
const BLACK_OFFSET: u8 = 0;

const fn color_offset(color: Color) -> u8 {
    match color {
        Color::White => WHITE_OFFSET,
        Color::Black => BLACK_OFFSET,
    }
}

const fn kind_code(piece: Piece) -> u8 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 2,
        Piece::Bishop => 3,
        Piece::Rook => 4,
        Piece::Queen => 5,
        Piece::King => 6,
    }
}

/// Integer code of a cell.
#[must_use]
pub const fn piece_code(cell: Cell) -> u8 {
    match cell {
        None => EMPTY_CODE,
        Some((color, piece)) => color_offset(color) + kind_code(piece),
    }
}

/// Cell described by an integer code.
pub fn cell_from_code(code: u8) -> Result<Cell, FenError> {
    if code == EMPTY_CODE {
        return Ok(None);
    }
    let (color, kind) = if code > WHITE_OFFSET {
        (Color::White, code - WHITE_OFFSET)
    } else {
        (Color::Black, code)
    };
    let piece = match kind {
        1 => Piece::Pawn,
        2 => Piece::Knight,
        3 => Piece::Bishop,
        4 => Piece::Rook,
        5 => Piece::Queen,
        6 => Piece::King,
        _ => return Err(FenError::InvalidPieceCode { code }),
    };
    Ok(Some((color, piece)))
}

impl Board {
    /// Build a board from rows of integer piece codes, row 0 first.
    pub fn from_codes(codes: &[[u8; 8]; 8]) -> Result<Self, FenError> {
        let mut squares: [[Cell; 8]; 8] = [[None; 8]; 8];
        for (row, code_row) in codes.iter().enumerate() {
            for (col, &code) in code_row.iter().enumerate() {
                squares[row][col] = cell_from_code(code)?;
            }
        }
        Ok(Board::from_rows(squares))
    }

    /// Rows of integer piece codes, row 0 first.
    #[must_use]
    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        let mut codes = [[EMPTY_CODE; 8]; 8];
        for (code_row, row) in codes.iter_mut().zip(self.rows()) {
            for (code, &cell) in code_row.iter_mut().zip(row) {
                *code = piece_code(cell);
            }
        }
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_CODES: [[u8; 8]; 8] = [
        [4, 2, 3, 5, 6, 3, 2, 4],
        [1, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [9, 9, 9, 9, 9, 9, 9, 9],
        [12, 10, 11, 13, 14, 11, 10, 12],
    ];

    #[test]
    fn test_codes_of_every_piece() {
        assert_eq!(piece_code(None), 0);
        assert_eq!(piece_code(Some((Color::Black, Piece::Pawn))), 1);
        assert_eq!(piece_code(Some((Color::Black, Piece::King))), 6);
        assert_eq!(piece_code(Some((Color::White, Piece::Pawn))), 9);
        assert_eq!(piece_code(Some((Color::White, Piece::King))), 14);
        for code in (0..=6).chain(9..=14) {
            assert_eq!(piece_code(cell_from_code(code).unwrap()), code);
        }
    }

    #[test]
    fn test_reserved_codes_are_rejected() {
        for code in [7, 8, 15, 16, 255] {
            assert_eq!(
                cell_from_code(code),
                Err(FenError::InvalidPieceCode { code })
            );
        }
    }

    #[test]
    fn test_start_position_codes() {
        assert_eq!(Board::starting_position().to_codes(), START_CODES);
        assert_eq!(
            Board::from_codes(&START_CODES).unwrap(),
            Board::starting_position()
        );
    }

    #[test]
    fn test_from_codes_rejects_bad_cell() {
        let mut codes = START_CODES;
        codes[3][3] = 7;
        assert_eq!(
            Board::from_codes(&codes),
            Err(FenError::InvalidPieceCode { code: 7 })
        );
    }
}
