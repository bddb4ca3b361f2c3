//! Static evaluation: terminal detection, material utility, and the
//! mobility heuristic used at the search horizon.
//!
//! All scores are absolute, positive favouring red and negative favouring
//! black, regardless of whose turn it is.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::move_generator::has_any_successor;
use crate::move_generation::piece_moves::piece_can_move;

/// Penalty applied per piece that has no legal step or jump.
pub const IMMOBILE_PIECE_PENALTY: i32 = 2;

pub trait BoardScorer: Send + Sync {
    /// Score with red positive, black negative.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Man => 1,
            PieceKind::King => 2,
        }
    }

    #[inline]
    fn side_material(game_state: &GameState, side: Side) -> i32 {
        game_state.man_count(side) as i32 * Self::piece_value(PieceKind::Man)
            + game_state.king_count(side) as i32 * Self::piece_value(PieceKind::King)
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        Self::side_material(game_state, Side::Red) - Self::side_material(game_state, Side::Black)
    }
}

/// Material plus a penalty for every piece that cannot move.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScorer;

impl MobilityScorer {
    fn immobile_pieces(game_state: &GameState, side: Side) -> i32 {
        game_state
            .side_squares(side)
            .filter(|&square| !piece_can_move(game_state, square))
            .count() as i32
    }
}

impl BoardScorer for MobilityScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let material = MaterialScorer.score(game_state);
        let red_stuck = Self::immobile_pieces(game_state, Side::Red);
        let black_stuck = Self::immobile_pieces(game_state, Side::Black);
        material - red_stuck * IMMOBILE_PIECE_PENALTY + black_stuck * IMMOBILE_PIECE_PENALTY
    }
}

/// Material count: man 1, king 2.
#[inline]
pub fn utility(game_state: &GameState) -> i32 {
    MaterialScorer.score(game_state)
}

#[inline]
pub fn heuristic(game_state: &GameState) -> i32 {
    MobilityScorer.score(game_state)
}

/// The game is over once either side has no pieces or no turn to play.
/// Both sides are checked because the state does not know whose turn it is.
pub fn is_terminal(game_state: &GameState) -> bool {
    [Side::Red, Side::Black].into_iter().any(|side| {
        game_state.piece_count(side) == 0 || !has_any_successor(game_state, side)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::expand_all;

    fn board(rows: [&str; 8]) -> GameState {
        GameState::from_board_text(&rows.join("\n")).expect("test board should parse")
    }

    #[test]
    fn utility_counts_kings_double() {
        assert_eq!(utility(&GameState::new_game()), 0);
        // red: R + r + r = 4, black: b*4 + B = 6
        assert_eq!(utility(&GameState::puzzle_position()), -2);
    }

    #[test]
    fn immobile_red_man_costs_two() {
        // Red man on (0,1) is pinned against the edge by black on (1,0).
        let state = board([
            ".b......", "r.......", "........", "........", "........", "........", "........",
            "........",
        ]);
        assert!(!piece_can_move(&state, square_at(0, 1)));
        assert_eq!(utility(&state), 0);
        assert_eq!(heuristic(&state), utility(&state) - 2);
    }

    #[test]
    fn immobile_black_piece_adds_two() {
        let state = board([
            "........", "........", "........", "........", "........", "........", ".......b",
            "......r.",
        ]);
        assert!(!piece_can_move(&state, square_at(7, 6)));
        assert!(piece_can_move(&state, square_at(6, 7)));
        assert_eq!(heuristic(&state), utility(&state) + 2);
    }

    #[test]
    fn terminal_when_a_side_is_wiped_out() {
        let state = board([
            "........", "........", "...R....", "........", "........", "........", "........",
            "........",
        ]);
        assert!(is_terminal(&state));
        assert!(is_terminal(&GameState::new_empty()));
    }

    #[test]
    fn terminal_when_either_side_cannot_move() {
        let state = board([
            ".b......", "r.......", "........", "........", "........", "........", "........",
            "........",
        ]);
        assert!(expand_all(&state, Side::Red).is_empty());
        assert!(!expand_all(&state, Side::Black).is_empty());
        assert!(is_terminal(&state));
    }

    #[test]
    fn opening_and_puzzle_are_not_terminal() {
        assert!(!is_terminal(&GameState::new_game()));
        assert!(!is_terminal(&GameState::puzzle_position()));
    }
}
