use core::fmt;

use crate::board::Board;
use crate::ship::Ship;

/// One of the two fixed seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Player1 => f.write_str("player1"),
            PlayerId::Player2 => f.write_str("player2"),
        }
    }
}

/// Shooting statistics of a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub shots_fired: u32,
    pub hits: u32,
    pub misses: u32,
    pub ships_destroyed: u32,
}

/// A seat at the table: its own board, its fleet and its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    pub(crate) board: Board,
    pub(crate) ships: Vec<Ship>,
    pub(crate) ships_remaining: usize,
    pub(crate) stats: PlayerStats,
}

impl Player {
    /// New player with an empty board, no ships and zeroed stats.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            board: Board::new(),
            ships: Vec::new(),
            ships_remaining: 0,
            stats: PlayerStats::default(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ships not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    /// `true` when the fleet is non-empty and every ship in it is sunk.
    /// A player without ships has nothing to lose and is never destroyed.
    pub fn is_fleet_destroyed(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Replace board and fleet, recounting the ships still afloat.
    pub(crate) fn install_fleet(&mut self, board: Board, ships: Vec<Ship>) {
        self.ships_remaining = ships.iter().filter(|s| !s.is_sunk()).count();
        self.board = board;
        self.ships = ships;
    }
}
