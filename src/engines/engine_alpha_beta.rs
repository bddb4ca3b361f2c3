//! Fixed-depth alpha-beta engine.
//!
//! Wraps the minimax search with the mobility heuristic at the horizon and
//! reports search statistics as info lines.

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::{checkers_types::Side, game_state::GameState};
use crate::move_generation::move_generator::CheckersMoveGenerator;
use crate::search::alpha_beta::{alpha_beta_search, SearchConfig};
use crate::search::board_scoring::MobilityScorer;

pub struct AlphaBetaEngine {
    default_depth: u8,
    move_generator: CheckersMoveGenerator,
    scorer: MobilityScorer,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            move_generator: CheckersMoveGenerator,
            scorer: MobilityScorer,
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "PlumCheckers AlphaBeta"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        side: Side,
        params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let max_depth = params.depth.unwrap_or(self.default_depth);
        let result = alpha_beta_search(
            game_state,
            side,
            &self.move_generator,
            &self.scorer,
            SearchConfig { max_depth },
        );

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} cutoffs {}",
            max_depth, result.best_score, result.nodes, result.cutoffs
        ));
        out.best_state = result.best_state;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::expand_all;

    #[test]
    fn returns_a_legal_successor() {
        let game = GameState::new_game();
        let mut engine = AlphaBetaEngine::new(2);
        let out = engine
            .choose_move(&game, Side::Black, &SearchParams::default())
            .expect("engine should run");
        let chosen = out.best_state.expect("opening has moves");
        assert!(expand_all(&game, Side::Black).contains(&chosen));
        assert!(out.info_lines[0].starts_with("info depth 2 "));
    }

    #[test]
    fn params_depth_overrides_default() {
        let mut engine = AlphaBetaEngine::default();
        let out = engine
            .choose_move(
                &GameState::puzzle_position(),
                Side::Red,
                &SearchParams { depth: Some(1) },
            )
            .expect("engine should run");
        assert!(out.info_lines[0].starts_with("info depth 1 "));
    }
}
