//! Text-grid-to-GameState loader.
//!
//! Reads the eight-row board format: character `x` of line `y` describes
//! square `(x, y)`. `r`, `R`, `b`, `B` place pieces; anything else leaves
//! the square empty.

use std::error::Error;
use std::fmt;

use crate::game_state::{checkers_types::*, game_state::GameState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    MissingRow(usize),
    ShortRow { row: usize, len: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::MissingRow(row) => {
                write!(f, "board text ends before row {row}")
            }
            BoardParseError::ShortRow { row, len } => write!(
                f,
                "board row {row} has {len} characters, expected {BOARD_WIDTH}"
            ),
        }
    }
}

impl Error for BoardParseError {}

pub fn parse_board(text: &str) -> Result<GameState, BoardParseError> {
    let mut state = GameState::new_empty();
    let mut lines = text.lines();

    for y in 0..BOARD_WIDTH {
        let line = lines
            .next()
            .ok_or(BoardParseError::MissingRow(y as usize))?
            .trim_end_matches('\r');
        let row: Vec<char> = line.chars().take(BOARD_WIDTH as usize).collect();
        if row.len() < BOARD_WIDTH as usize {
            return Err(BoardParseError::ShortRow {
                row: y as usize,
                len: row.len(),
            });
        }

        for (x, ch) in row.into_iter().enumerate() {
            if let Some(piece) = Piece::from_char(ch) {
                state.put_piece(square_at(x as u8, y), piece);
            }
        }
    }

    Ok(state)
}
