use rand::rngs::SmallRng;

use crate::ai::AiState;
use crate::autoplace::auto_place_ships;
use crate::board::Board;
use crate::common::{EngineError, Position, ShotResult};
use crate::ship::Ship;
use crate::strategy::Strategy;

/// Automated opponent: random placement and hunt/target shooting.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    state: AiState,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search state.
    pub fn state(&self) -> &AiState {
        &self.state
    }
}

impl Strategy for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ships: &mut [Ship],
    ) -> Result<(), EngineError> {
        auto_place_ships(board, ships, rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Result<Position, EngineError> {
        self.state.next_shot(target, rng)
    }

    fn handle_shot_result(&mut self, position: Position, result: ShotResult) {
        self.state.record_result(position, result);
    }
}
