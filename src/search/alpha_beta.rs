//! Depth-limited minimax with alpha-beta pruning.
//!
//! Red maximises and black minimises. Each node orders its successors by the
//! scorer (best-first for the side to move, stable on ties) before
//! recursing, which lets the window close early more often.
//!
//! The two node kinds treat the horizon differently: a red node at depth 0
//! returns the heuristic score, while a black node at depth 0 returns plain
//! material utility, the same as a terminal position.

use std::cmp::Reverse;

use log::{debug, warn};

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::move_generator::{CheckersMoveGenerator, MoveGenerator};
use crate::search::board_scoring::{is_terminal, utility, BoardScorer, MobilityScorer};

pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    /// State after the chosen turn; `None` when the root is terminal.
    pub best_state: Option<GameState>,
    pub best_score: i32,
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Pick red's next state, looking `depth_limit` turns ahead.
pub fn search(game_state: &GameState, depth_limit: u8) -> Option<GameState> {
    search_for_side(
        game_state,
        Side::Red,
        SearchConfig {
            max_depth: depth_limit,
        },
    )
    .best_state
}

pub fn search_for_side(game_state: &GameState, side: Side, config: SearchConfig) -> SearchResult {
    alpha_beta_search(
        game_state,
        side,
        &CheckersMoveGenerator,
        &MobilityScorer,
        config,
    )
}

/// Search with a caller-chosen generator and horizon scorer. Terminal
/// positions are always scored by material utility.
///
/// The root proposes a move whenever one exists: at depth 0 that is the
/// first successor in scorer order, with no lookahead.
pub fn alpha_beta_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    side: Side,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut searcher = AlphaBeta {
        generator,
        scorer,
        nodes: 0,
        cutoffs: 0,
    };

    let depth = config.max_depth;
    let (mut best_state, best_score) = match side {
        Side::Red => searcher.max_node(game_state, -SCORE_INFINITY, SCORE_INFINITY, depth),
        Side::Black => searcher.min_node(game_state, -SCORE_INFINITY, SCORE_INFINITY, depth),
    };

    if best_state.is_none() && !is_terminal(game_state) {
        best_state = searcher.ordered_successors(game_state, side).into_iter().next();
    }

    debug!(
        "alpha_beta side={side:?} depth={depth} score={best_score} nodes={} cutoffs={} found_move={}",
        searcher.nodes,
        searcher.cutoffs,
        best_state.is_some()
    );

    SearchResult {
        best_state,
        best_score,
        nodes: searcher.nodes,
        cutoffs: searcher.cutoffs,
    }
}

struct AlphaBeta<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    nodes: u64,
    cutoffs: u64,
}

impl<G: MoveGenerator, S: BoardScorer> AlphaBeta<'_, G, S> {
    fn max_node(
        &mut self,
        game_state: &GameState,
        mut alpha: i32,
        beta: i32,
        depth: u8,
    ) -> (Option<GameState>, i32) {
        self.nodes += 1;
        if is_terminal(game_state) {
            return (None, utility(game_state));
        }
        if depth == 0 {
            return (None, self.scorer.score(game_state));
        }

        let children = self.ordered_successors(game_state, Side::Red);
        if children.is_empty() {
            warn!("red has no successors in a non-terminal position");
            return (None, self.scorer.score(game_state));
        }

        let mut best = None;
        let mut value = -SCORE_INFINITY;
        for child in children {
            let (_, score) = self.min_node(&child, alpha, beta, depth - 1);
            if score > value {
                value = score;
                best = Some(child);
            }
            if value >= beta {
                self.cutoffs += 1;
                return (best, value);
            }
            alpha = alpha.max(value);
        }
        (best, value)
    }

    fn min_node(
        &mut self,
        game_state: &GameState,
        alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> (Option<GameState>, i32) {
        self.nodes += 1;
        if is_terminal(game_state) || depth == 0 {
            return (None, utility(game_state));
        }

        let children = self.ordered_successors(game_state, Side::Black);
        if children.is_empty() {
            warn!("black has no successors in a non-terminal position");
            return (None, utility(game_state));
        }

        let mut best = None;
        let mut value = SCORE_INFINITY;
        for child in children {
            let (_, score) = self.max_node(&child, alpha, beta, depth - 1);
            if score < value {
                value = score;
                best = Some(child);
            }
            if value <= alpha {
                self.cutoffs += 1;
                return (best, value);
            }
            beta = beta.min(value);
        }
        (best, value)
    }

    /// Successors for `side`, most promising first. `sort_by_key` is
    /// stable, so equal scores keep generation order.
    fn ordered_successors(&self, game_state: &GameState, side: Side) -> Vec<GameState> {
        let mut scored: Vec<(i32, GameState)> = self
            .generator
            .generate_successors(game_state, side)
            .into_iter()
            .map(|next| (self.scorer.score(&next), next))
            .collect();

        match side {
            Side::Red => scored.sort_by_key(|&(score, _)| Reverse(score)),
            Side::Black => scored.sort_by_key(|&(score, _)| score),
        }
        scored.into_iter().map(|(_, next)| next).collect()
    }
}
