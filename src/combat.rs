//! Shot resolution against a board and its fleet.

use std::collections::BTreeSet;

use crate::board::{Board, CellStatus};
use crate::common::{EngineError, Position, ShotResult};
use crate::ship::Ship;

/// `true` once the ship has taken at least `length` hits.
pub fn is_ship_sunk(ship: &Ship) -> bool {
    ship.hits() >= ship.length()
}

/// First ship in `ships` whose id is `id`.
pub fn find_ship_by_id<'a>(ships: &'a [Ship], id: &str) -> Option<&'a Ship> {
    ships.iter().find(|s| s.id() == id)
}

fn find_ship_by_id_mut<'a>(ships: &'a mut [Ship], id: &str) -> Option<&'a mut Ship> {
    ships.iter_mut().find(|s| s.id() == id)
}

/// Ids of ships that still have at least one untouched (`Ship`) cell.
pub fn ships_on_board(board: &Board) -> BTreeSet<String> {
    board
        .cells()
        .filter(|cell| cell.status() == CellStatus::Ship)
        .filter_map(|cell| cell.occupant().map(str::to_owned))
        .collect()
}

/// What a shot does to a cell in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Impact {
    /// Cell was already shot; report the earlier outcome and change nothing.
    Repeat(ShotResult),
    /// Empty → Miss.
    Splash,
    /// Ship → Hit, possibly Sunk.
    Strike,
}

fn impact(status: CellStatus) -> Impact {
    match status {
        CellStatus::Miss => Impact::Repeat(ShotResult::Miss),
        CellStatus::Hit | CellStatus::Sunk => Impact::Repeat(ShotResult::Hit),
        CellStatus::Empty => Impact::Splash,
        CellStatus::Ship => Impact::Strike,
    }
}

/// Fire at `position` on `board`, updating the struck ship in `ships`.
///
/// Shooting a cell twice is harmless: the earlier outcome is reported again
/// (`Miss` for water, `Hit` for any ship segment) and nothing is counted.
/// When a hit sinks its ship, every footprint cell becomes `Sunk`.
pub fn process_shot(
    board: &mut Board,
    position: Position,
    ships: &mut [Ship],
) -> Result<ShotResult, EngineError> {
    let cell = board
        .cell_mut(position)
        .ok_or(EngineError::OutOfBounds(position))?;

    match impact(cell.status) {
        Impact::Repeat(result) => {
            log::debug!("repeat shot at {} -> {:?}", position, result);
            Ok(result)
        }
        Impact::Splash => {
            cell.status = CellStatus::Miss;
            log::debug!("miss at {}", position);
            Ok(ShotResult::Miss)
        }
        Impact::Strike => {
            let ship_id = cell.occupant.clone().ok_or_else(|| {
                log::error!("ship cell at {} has no occupant", position);
                EngineError::MissingOccupant(position)
            })?;
            let ship = find_ship_by_id_mut(ships, &ship_id).ok_or_else(|| {
                log::error!("cell {} references unknown ship {}", position, ship_id);
                EngineError::UnknownShip(ship_id.clone())
            })?;
            cell.status = CellStatus::Hit;

            if !ship.register_hit() {
                log::debug!("hit {} at {}", ship_id, position);
                return Ok(ShotResult::Hit);
            }
            for p in ship.cells() {
                if let Some(c) = board.cell_mut(p) {
                    c.status = CellStatus::Sunk;
                }
            }
            log::info!("sunk {} with shot at {}", ship_id, position);
            Ok(ShotResult::Sunk)
        }
    }
}
