//! Whole-side successor generation behind the `MoveGenerator` seam.

use std::collections::HashSet;

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::piece_moves::{expand_piece, piece_can_move};

pub trait MoveGenerator: Send + Sync {
    /// Distinct states reachable in one turn by `side`, in generation order.
    fn generate_successors(&self, game_state: &GameState, side: Side) -> Vec<GameState>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckersMoveGenerator;

impl MoveGenerator for CheckersMoveGenerator {
    fn generate_successors(&self, game_state: &GameState, side: Side) -> Vec<GameState> {
        expand_all(game_state, side)
    }
}

/// Union of every piece's turns for `side`, pieces visited in ascending
/// square order. Duplicates and the unchanged input state are dropped.
///
/// Captures are not forced: plain steps are listed alongside capture
/// chains.
pub fn expand_all(game_state: &GameState, side: Side) -> Vec<GameState> {
    let mut seen = HashSet::new();
    seen.insert(*game_state);

    let mut out = Vec::new();
    for square in game_state.side_squares(side) {
        for next in expand_piece(game_state, square, side) {
            if seen.insert(next) {
                out.push(next);
            }
        }
    }
    out
}

/// Cheap check for `!expand_all(game_state, side).is_empty()`.
pub fn has_any_successor(game_state: &GameState, side: Side) -> bool {
    game_state
        .side_squares(side)
        .any(|square| piece_can_move(game_state, square))
}
