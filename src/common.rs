//! Common types for the rules engine: grid positions, shot results and errors.

use core::fmt;
use thiserror::Error;

use crate::config::BOARD_SIZE;
use crate::game::GamePhase;

/// Returns `true` iff both `row` and `col` lie in `[0, BOARD_SIZE)`.
///
/// Every bounds check in the crate goes through this function.
pub fn is_position_valid(row: i32, col: i32) -> bool {
    let n = BOARD_SIZE as i32;
    (0..n).contains(&row) && (0..n).contains(&col)
}

/// A (row, col) pair on the grid. Values outside the grid are representable
/// so that callers can hand in raw input; use [`Position::is_valid`] before
/// indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_valid(&self) -> bool {
        is_position_valid(self.row, self.col)
    }

    /// Position shifted by (`d_row`, `d_col`). No bounds check.
    ///
    /// Saturates at the `i32` limits. A saturated coordinate is always off
    /// the grid, so bounds checks on the result stay correct.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Position shifted by (`d_row`, `d_col`), or `None` if a coordinate
    /// overflows `i32`.
    pub fn checked_offset(&self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }

    /// Grid indices for an in-bounds position.
    pub(crate) fn indices(&self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Rejected turn input. These are expected conditions the caller surfaces and
/// retries; nothing is mutated when one is reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("Invalid position - outside board boundaries")]
    InvalidPosition,
    #[error("Cannot shoot - game is over")]
    GameOver,
    #[error("Cannot shoot - game is not in BATTLE phase")]
    NotInBattle,
}

/// Broken engine invariants. Under correct use of the placement and turn
/// APIs none of these can occur.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("ship cell at {0} has no occupant")]
    MissingOccupant(Position),
    #[error("ship `{0}` is not part of the fleet")]
    UnknownShip(String),
    #[error("no cells left to shoot at")]
    NoShootableCells,
    #[error("failed to place ship `{ship_id}` after {attempts} attempts")]
    PlacementExhausted { ship_id: String, attempts: usize },
    #[error("ship `{ship_id}` cannot be placed at {anchor}")]
    InvalidPlacement { ship_id: String, anchor: Position },
    #[error("operation requires {expected:?} phase, game is in {actual:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("match did not finish within {0} shots")]
    StalledMatch(usize),
    #[error("malformed board: {0}")]
    MalformedBoard(String),
    #[error("shot at {position} rejected: {reason}")]
    RejectedShot { position: Position, reason: TurnError },
}
