//! FEN encode/decode for [`GameState`].
//!
//! Decoding is lenient about missing trailing fields, which take the
//! starting-position defaults, but strict about the board layout.

use std::fmt;
use std::str::FromStr;

use super::error::{ClockField, FenError};
use super::state::Cell;
use super::{Board, CastlingRights, Color, Coord, GameState, Piece};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Parse a game state from FEN notation.
    ///
    /// Missing fields default to: starting board, White to move, all four
    /// castling rights, no en-passant target, halfmove `0`, fullmove `1`.
    /// An empty string is therefore the starting position. The board is
    /// everything before the first whitespace; when that is empty (`" b"`) the
    /// starting board is used and the remaining fields still apply. A
    /// present castling field grants exactly the rights it names, so `-`
    /// means none.
    pub fn decode(fen: &str) -> Result<Self, FenError> {
        let (board_field, rest) = fen.split_once(char::is_whitespace).unwrap_or((fen, ""));
        let mut parts = rest.split_whitespace();

        let board = match board_field {
            "" => Board::starting_position(),
            field => parse_board(field)?,
        };

        let side_to_move = match parts.next() {
            Some("b") => Color::Black,
            Some("w") | None => Color::White,
            Some(_other) => {
                #[cfg(feature = "logging")]
                log::warn!("unrecognised active colour '{_other}', assuming white");
                Color::White
            }
        };

        let castling = match parts.next() {
            Some(field) => {
                #[cfg(feature = "logging")]
                if field.chars().any(|c| !"KQkq-".contains(c)) {
                    log::warn!("ignoring unknown letters in castling field '{field}'");
                }
                CastlingRights::from_fen_field(field)
            }
            None => CastlingRights::all(),
        };

        let en_passant = match parts.next() {
            None | Some("-") => None,
            Some(field) => Some(field.parse::<Coord>().map_err(|_| {
                FenError::InvalidEnPassant {
                    found: field.to_string(),
                }
            })?),
        };

        let halfmove_clock = parse_clock(parts.next(), ClockField::Halfmove, 0)?;
        let fullmove_number = parse_clock(parts.next(), ClockField::Fullmove, 1)?;

        #[cfg(feature = "logging")]
        if parts.next().is_some() {
            log::warn!("ignoring trailing fields after fullmove counter in '{fen}'");
        }

        let state = GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };

        #[cfg(feature = "logging")]
        log::debug!("decoded FEN '{fen}'");

        Ok(state)
    }

    /// Convert the game state to FEN notation.
    #[must_use]
    pub fn encode(&self) -> String {
        let rows: Vec<String> = self.board.rows().iter().map(encode_row).collect();
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        let fen = format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        );

        #[cfg(feature = "logging")]
        log::debug!("encoded FEN '{fen}'");

        fen
    }
}

fn parse_board(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut squares: [[Cell; 8]; 8] = [[None; 8]; 8];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10).filter(|&n| n > 0) {
                file += run as usize;
                continue;
            }
            let cell = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file < 8 {
                squares[row][file] = Some(cell);
            }
            file += 1;
        }
        if file != 8 {
            return Err(FenError::WrongFileCount {
                rank: row,
                files: file,
            });
        }
    }
    Ok(Board::from_rows(squares))
}

fn encode_row(row: &[Cell; 8]) -> String {
    let mut out = String::new();
    let mut empty = 0;
    for cell in row {
        match cell {
            Some((color, piece)) => {
                if empty > 0 {
                    out.push_str(&empty.to_string());
                    empty = 0;
                }
                out.push(piece.to_fen_char(*color));
            }
            None => empty += 1,
        }
    }
    if empty > 0 {
        out.push_str(&empty.to_string());
    }
    out
}

fn parse_clock(field: Option<&str>, which: ClockField, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidClock {
            field: which,
            found: text.to_string(),
        }),
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::decode(s)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
