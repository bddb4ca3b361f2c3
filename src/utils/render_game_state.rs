//! Plain-text board renderer.
//!
//! Produces the same eight-row grid the board loader reads, plus an
//! annotated variant with coordinate labels for debugging.

use crate::game_state::{checkers_types::*, game_state::GameState};

/// Render one line per row, `.` for empty squares.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::with_capacity(SQUARE_COUNT + BOARD_WIDTH as usize);
    for y in 0..BOARD_WIDTH {
        for x in 0..BOARD_WIDTH {
            out.push(square_char(game_state, square_at(x, y)));
        }
        out.push('\n');
    }
    out
}

/// Render with x labels across the top and y labels down the left.
pub fn render_game_state_with_coords(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");
    for y in 0..BOARD_WIDTH {
        out.push(char::from(b'0' + y));
        for x in 0..BOARD_WIDTH {
            out.push(' ');
            out.push(square_char(game_state, square_at(x, y)));
        }
        out.push('\n');
    }

    out
}

fn square_char(game_state: &GameState, square: Square) -> char {
    game_state.piece_at(square).map_or('.', Piece::to_char)
}
