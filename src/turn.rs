//! One play action: validate, resolve the shot against the opponent, update
//! statistics, check for victory and pass the turn on a miss.

use crate::combat::{find_ship_by_id, process_shot};
use crate::common::{EngineError, Position, ShotResult, TurnError};
use crate::game::{GamePhase, GameState};
use crate::player::PlayerId;
use crate::ship::Ship;

/// Hit bonus: a player who hits or sinks shoots again.
pub fn can_shoot_again(result: ShotResult) -> bool {
    result.is_hit()
}

/// Outcome of [`GameState::process_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub shot_result: ShotResult,
    /// Same player moves again.
    pub continues_turn: bool,
    /// Set when this shot ended the game.
    pub winner: Option<PlayerId>,
    /// Snapshot of the ship this shot sank.
    pub sunk_ship: Option<Ship>,
    /// Why the turn was rejected. Nothing was mutated when this is set.
    pub error: Option<TurnError>,
}

impl TurnResult {
    fn rejected(error: TurnError) -> Self {
        Self {
            shot_result: ShotResult::Miss,
            continues_turn: false,
            winner: None,
            sunk_ship: None,
            error: Some(error),
        }
    }
}

impl GameState {
    /// Fire the current player's shot at `position` on the opponent's board.
    ///
    /// Bad input (off-board position, wrong phase) comes back as
    /// `TurnResult::error` with the game untouched. `Err` is reserved for a
    /// corrupted board or fleet.
    pub fn process_turn(&mut self, position: Position) -> Result<TurnResult, EngineError> {
        if !position.is_valid() {
            log::warn!("rejected shot at {}: outside the board", position);
            return Ok(TurnResult::rejected(TurnError::InvalidPosition));
        }
        match self.phase {
            GamePhase::Battle => {}
            GamePhase::GameOver => {
                log::warn!("rejected shot at {}: game is over", position);
                return Ok(TurnResult::rejected(TurnError::GameOver));
            }
            GamePhase::Setup => {
                log::warn!("rejected shot at {}: battle has not started", position);
                return Ok(TurnResult::rejected(TurnError::NotInBattle));
            }
        }

        let shooter_id = self.current_player;
        let (shooter, target) = self.shooter_and_target();
        let shot_result = process_shot(&mut target.board, position, &mut target.ships)?;

        let sunk_ship = if shot_result == ShotResult::Sunk {
            let ship_id = target.board[position]
                .occupant()
                .ok_or(EngineError::MissingOccupant(position))?;
            let ship = find_ship_by_id(&target.ships, ship_id)
                .ok_or_else(|| EngineError::UnknownShip(ship_id.to_owned()))?
                .clone();
            target.ships_remaining = target.ships_remaining.saturating_sub(1);
            Some(ship)
        } else {
            None
        };

        shooter.stats.shots_fired += 1;
        if shot_result.is_hit() {
            shooter.stats.hits += 1;
        } else {
            shooter.stats.misses += 1;
        }
        if sunk_ship.is_some() {
            shooter.stats.ships_destroyed += 1;
        }
        log::debug!(
            "turn {}: {} fired at {} -> {:?}",
            self.turn_count,
            shooter_id,
            position,
            shot_result
        );

        let winner = self.check_victory();
        let continues_turn = can_shoot_again(shot_result);
        if !continues_turn && winner.is_none() {
            self.switch_turn();
        }

        Ok(TurnResult {
            shot_result,
            continues_turn,
            winner,
            sunk_ship,
            error: None,
        })
    }
}
