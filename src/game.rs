use rand::Rng;

use crate::autoplace::auto_place_ships;
use crate::board::Board;
use crate::common::EngineError;
use crate::fleet::{create_fleet, FleetConfig};
use crate::player::{Player, PlayerId};
use crate::ship::Ship;

/// Lifecycle of a game: Setup → Battle → GameOver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GamePhase {
    Setup,
    Battle,
    GameOver,
}

/// The single authoritative record of one game. Engine operations take it by
/// `&mut`; clone it to hand a stable snapshot to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub(crate) phase: GamePhase,
    pub(crate) current_player: PlayerId,
    pub(crate) players: [Player; 2],
    pub(crate) winner: Option<PlayerId>,
    pub(crate) turn_count: u32,
}

impl GameState {
    /// New game in Setup: Player1 to move, turn 0, both boards empty.
    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self {
            phase: GamePhase::Setup,
            current_player: PlayerId::Player1,
            players: [
                Player::new(PlayerId::Player1, player1_name),
                Player::new(PlayerId::Player2, player2_name),
            ],
            winner: None,
            turn_count: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Set iff the phase is `GameOver`.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Player whose turn it is.
    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    /// Player being shot at this turn.
    pub fn opponent_player(&self) -> &Player {
        self.player(self.current_player.opponent())
    }

    /// Shooter and target for the current turn, borrowed together.
    pub(crate) fn shooter_and_target(&mut self) -> (&mut Player, &mut Player) {
        let (first, second) = self.players.split_at_mut(1);
        match self.current_player {
            PlayerId::Player1 => (&mut first[0], &mut second[0]),
            PlayerId::Player2 => (&mut second[0], &mut first[0]),
        }
    }

    fn require_setup(&self) -> Result<(), EngineError> {
        if self.phase != GamePhase::Setup {
            return Err(EngineError::WrongPhase {
                expected: GamePhase::Setup,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Install a placed board and fleet for `id` during Setup.
    pub fn set_player_fleet(
        &mut self,
        id: PlayerId,
        board: Board,
        ships: Vec<Ship>,
    ) -> Result<(), EngineError> {
        self.require_setup()?;
        log::debug!("{} deployed {} ships", id, ships.len());
        self.player_mut(id).install_fleet(board, ships);
        Ok(())
    }

    /// Randomly place the fleet of `id` on a fresh board during Setup.
    ///
    /// A player without ships gets the default roster. An existing fleet is
    /// redeployed undamaged with the same ids and types. On failure the
    /// player keeps its previous board and fleet.
    pub fn auto_place_fleet<R: Rng + ?Sized>(
        &mut self,
        id: PlayerId,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.require_setup()?;
        let current = self.player(id).ships();
        let mut ships = if current.is_empty() {
            create_fleet(&FleetConfig::default())
        } else {
            current
                .iter()
                .map(|s| Ship::new(s.id(), s.ship_type()))
                .collect()
        };
        let mut board = Board::new();
        auto_place_ships(&mut board, &mut ships, rng)?;
        log::debug!("{} auto-placed {} ships", id, ships.len());
        self.player_mut(id).install_fleet(board, ships);
        Ok(())
    }

    /// Leave Setup and start the battle with Player1 on turn 1.
    ///
    /// Players without a fleet receive the default roster (unplaced); fleets
    /// installed during Setup are kept as they are. Outside Setup this does
    /// nothing.
    pub fn initialize(&mut self) {
        if self.phase != GamePhase::Setup {
            return;
        }
        for player in self.players.iter_mut() {
            if player.ships.is_empty() {
                player.ships = create_fleet(&FleetConfig::default());
                player.ships_remaining = player.ships.len();
            }
        }
        self.phase = GamePhase::Battle;
        self.current_player = PlayerId::Player1;
        self.turn_count = 1;
        log::info!(
            "battle started: {} vs {}",
            self.players[0].name(),
            self.players[1].name()
        );
    }

    /// Hand the move to the other player and advance the turn counter.
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_count += 1;
    }

    /// Decide whether the game has been won.
    ///
    /// Nothing is checked during Setup; once over, the recorded winner is
    /// returned as is. Otherwise the side whose whole fleet is sunk loses and
    /// the game moves to `GameOver`.
    pub fn check_victory(&mut self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Setup => return None,
            GamePhase::GameOver => return self.winner,
            GamePhase::Battle => {}
        }

        let winner = if self.player(PlayerId::Player2).is_fleet_destroyed() {
            PlayerId::Player1
        } else if self.player(PlayerId::Player1).is_fleet_destroyed() {
            PlayerId::Player2
        } else {
            return None;
        };

        self.phase = GamePhase::GameOver;
        self.winner = Some(winner);
        log::info!(
            "{} ({}) wins after {} turns",
            self.player(winner).name(),
            winner,
            self.turn_count
        );
        Some(winner)
    }
}

