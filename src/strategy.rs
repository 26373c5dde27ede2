use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{EngineError, Position, ShotResult};
use crate::ship::Ship;

/// Interface implemented by the things that drive one side of a game.
///
/// A strategy is responsible for:
/// - Placing its fleet on its own board during setup
/// - Picking a target on the opponent's board
/// - Learning from the outcome of its own shots
pub trait Strategy {
    /// Place `ships` onto `board`, updating each ship's placement.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ships: &mut [Ship],
    ) -> Result<(), EngineError>;

    /// Choose the next cell to fire at. `target` is the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Result<Position, EngineError>;

    /// Inform the strategy of the result of its last shot.
    fn handle_shot_result(&mut self, _position: Position, _result: ShotResult) {}
}
