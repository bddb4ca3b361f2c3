//! Engine abstraction used by the match harness and binaries.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be swapped behind a single trait object.

use crate::game_state::{checkers_types::Side, game_state::GameState};

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    /// Overrides the engine's own depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_state: Option<GameState>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose `side`'s next state. `best_state` is `None` only when `side`
    /// has no turn to play.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        side: Side,
        params: &SearchParams,
    ) -> Result<EngineOutput, String>;
}
