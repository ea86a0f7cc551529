//! Error types for board and FEN operations.

use std::fmt;

/// Which move-counter field of a FEN string failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockField {
    Halfmove,
    Fullmove,
}

impl fmt::Display for ClockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockField::Halfmove => write!(f, "halfmove clock"),
            ClockField::Fullmove => write!(f, "fullmove counter"),
        }
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Board field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove or fullmove field is not a non-negative integer
    InvalidClock { field: ClockField, found: String },
    /// Legacy integer board holds a value outside `{0..6, 8..14}`
    InvalidPieceCode { code: u8 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
            FenError::InvalidPieceCode { code } => {
                write!(f, "Invalid piece code {code}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing and placement failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinate outside the 8x8 board
    OutOfBounds { x: i32, y: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({x}, {y}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_wrong_rank_count() {
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_fen_error_wrong_file_count() {
        let err = FenError::WrongFileCount { rank: 2, files: 9 };
        let msg = err.to_string();
        assert!(msg.contains("Rank 2"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_invalid_clock() {
        let err = FenError::InvalidClock {
            field: ClockField::Fullmove,
            found: "x".to_string(),
        };
        assert!(err.to_string().contains("fullmove counter"));
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_fen_error_equality() {
        let err1 = FenError::InvalidPieceCode { code: 7 };
        let err2 = FenError::InvalidPieceCode { code: 7 };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_square_error_out_of_bounds() {
        let err = SquareError::OutOfBounds { x: -1, y: 8 };
        assert!(err.to_string().contains("(-1, 8)"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }
}
