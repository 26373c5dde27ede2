//! Ship footprints and placement rules. Ships may not overlap and may not
//! touch each other, not even diagonally.

use crate::board::{Board, CellStatus};
use crate::common::{EngineError, Position};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship};

const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `length` cells starting at `anchor` and stepping along `orientation`.
/// Cells are not bounds-checked.
///
/// The footprint ends early at the first cell whose coordinates would
/// overflow `i32`. A `length` that does not fit in `i32` yields no cells.
pub fn ship_cells(anchor: Position, length: usize, orientation: Orientation) -> Vec<Position> {
    let Ok(length) = i32::try_from(length) else {
        return Vec::new();
    };
    let (dr, dc) = orientation.step();
    (0..length)
        .map_while(|i| anchor.checked_offset(dr * i, dc * i))
        .collect()
}

/// `true` if any in-bounds cell among the 8 around `position` holds an intact
/// ship segment.
pub fn has_adjacent_ships(board: &Board, position: Position) -> bool {
    NEIGHBOURS
        .iter()
        .map(|&(dr, dc)| position.offset(dr, dc))
        .any(|p| board.status(p) == Some(CellStatus::Ship))
}

/// `true` if every footprint cell is in bounds, empty, and has no ship in its
/// neighbourhood. A zero-length ship or one longer than the board never fits.
pub fn can_place_ship(
    board: &Board,
    anchor: Position,
    length: usize,
    orientation: Orientation,
) -> bool {
    if length == 0 || length > BOARD_SIZE {
        return false;
    }
    let cells = ship_cells(anchor, length, orientation);
    cells.len() == length
        && cells.into_iter().all(|cell| {
            cell.is_valid() && board.is_cell_empty(cell) && !has_adjacent_ships(board, cell)
        })
}

/// Write `ship` onto every cell of its footprint.
///
/// No rule checks are made; call [`can_place_ship`] first.
///
/// # Panics
/// Panics if a footprint cell lies outside the grid.
pub fn place_ship(board: &mut Board, ship: &Ship) {
    for position in ship.cells() {
        let cell = &mut board[position];
        cell.status = CellStatus::Ship;
        cell.occupant = Some(ship.id().to_owned());
    }
}

/// Validated placement: sets the ship's anchor and orientation and writes it
/// to the board, or leaves both untouched if the footprint breaks a rule.
pub fn try_place_ship(
    board: &mut Board,
    ship: &mut Ship,
    anchor: Position,
    orientation: Orientation,
) -> Result<(), EngineError> {
    if !can_place_ship(board, anchor, ship.length(), orientation) {
        return Err(EngineError::InvalidPlacement {
            ship_id: ship.id().to_owned(),
            anchor,
        });
    }
    ship.set_placement(anchor, orientation);
    place_ship(board, ship);
    log::debug!("placed {} at {} ({:?})", ship.id(), anchor, orientation);
    Ok(())
}
