//! Random-move engine.
//!
//! Picks uniformly among successors. Used as a baseline opponent and for
//! exercising the match harness.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::{checkers_types::Side, game_state::GameState};
use crate::move_generation::move_generator::{CheckersMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: CheckersMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: CheckersMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        side: Side,
        _params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let successors = self.move_generator.generate_successors(game_state, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine successors {}", successors.len()));

        if successors.is_empty() {
            return Ok(out);
        }

        let picked = successors
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;
        out.best_state = Some(*picked);
        Ok(out)
    }
}
