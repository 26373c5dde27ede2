//! Automated AI vs AI match driven through the turn manager.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{EngineError, Position, ShotResult};
use crate::config::BOARD_SIZE;
use crate::fleet::{create_fleet, FleetConfig};
use crate::game::GameState;
use crate::player::{PlayerId, PlayerStats};
use crate::player_ai::AiPlayer;
use crate::strategy::Strategy;

/// Setup for [`play_ai_match`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub player1_name: String,
    pub player2_name: String,
    pub fleet: FleetConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".to_owned(),
            player2_name: "Player 2".to_owned(),
            fleet: FleetConfig::default(),
        }
    }
}

/// A single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: PlayerId,
    pub position: Position,
    pub result: ShotResult,
}

/// Per-player summary at the end of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub ships_remaining: usize,
    pub stats: PlayerStats,
}

/// Outcome of an automated match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub winner: PlayerId,
    pub turn_count: u32,
    pub shots: Vec<ShotRecord>,
    pub players: Vec<PlayerSummary>,
}

/// Play a full game between two [`AiPlayer`]s and return the final state
/// together with its report.
pub fn play_ai_match(
    config: &MatchConfig,
    rng: &mut SmallRng,
) -> Result<(GameState, MatchReport), EngineError> {
    let mut player1 = AiPlayer::new();
    let mut player2 = AiPlayer::new();
    play_match(config, [&mut player1, &mut player2], rng)
}

/// Play a full game with `strategies[0]` as Player1 and `strategies[1]` as
/// Player2.
///
/// Each strategy places its own fleet, then turns go through
/// [`GameState::process_turn`] until a winner is decided. A target the engine
/// rejects ends the match with [`EngineError::RejectedShot`].
pub fn play_match(
    config: &MatchConfig,
    mut strategies: [&mut dyn Strategy; 2],
    rng: &mut SmallRng,
) -> Result<(GameState, MatchReport), EngineError> {
    let mut state = GameState::new(config.player1_name.as_str(), config.player2_name.as_str());

    for id in [PlayerId::Player1, PlayerId::Player2] {
        let mut board = Board::new();
        let mut ships = create_fleet(&config.fleet);
        strategies[id.index()].place_fleet(rng, &mut board, &mut ships)?;
        state.set_player_fleet(id, board, ships)?;
    }
    state.initialize();

    let shot_limit = 2 * BOARD_SIZE * BOARD_SIZE;
    let mut shots = Vec::new();
    let winner = loop {
        if shots.len() >= shot_limit {
            log::error!("match stalled after {} shots", shots.len());
            return Err(EngineError::StalledMatch(shot_limit));
        }
        let shooter = state.current_player();
        let strategy = &mut strategies[shooter.index()];
        let position = strategy.select_target(rng, state.opponent_player().board())?;
        let turn = state.process_turn(position)?;
        if let Some(reason) = turn.error {
            log::error!("{} fired at {}: {}", shooter, position, reason);
            return Err(EngineError::RejectedShot { position, reason });
        }
        strategy.handle_shot_result(position, turn.shot_result);
        shots.push(ShotRecord {
            shooter,
            position,
            result: turn.shot_result,
        });
        if let Some(winner) = turn.winner {
            break winner;
        }
    };

    let players = [PlayerId::Player1, PlayerId::Player2]
        .into_iter()
        .map(|id| {
            let player = state.player(id);
            PlayerSummary {
                id,
                name: player.name().to_owned(),
                ships_remaining: player.ships_remaining(),
                stats: player.stats(),
            }
        })
        .collect();
    let report = MatchReport {
        winner,
        turn_count: state.turn_count(),
        shots,
        players,
    };
    Ok((state, report))
}
