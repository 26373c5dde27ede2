//! Board model: an N×N grid of cells with status and occupant tracking.

use core::fmt;
use core::ops::{Index, IndexMut};

#[cfg(feature = "std")]
use crate::common::EngineError;
use crate::common::Position;
use crate::config::BOARD_SIZE;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellStatus {
    /// Open water, not shot at.
    Empty,
    /// Intact ship segment, not shot at.
    Ship,
    /// Open water that has been shot.
    Miss,
    /// Ship segment that has been shot, ship still afloat.
    Hit,
    /// Segment of a ship that has been sunk.
    Sunk,
}

impl CellStatus {
    /// `true` while the cell has not been fired upon.
    pub fn is_shootable(self) -> bool {
        matches!(self, CellStatus::Empty | CellStatus::Ship)
    }

    fn symbol(self, reveal_ships: bool) -> char {
        match self {
            CellStatus::Empty => '.',
            CellStatus::Ship if reveal_ships => 'S',
            CellStatus::Ship => '.',
            CellStatus::Miss => 'o',
            CellStatus::Hit => 'X',
            CellStatus::Sunk => '#',
        }
    }
}

/// One grid cell. `occupant` carries the id of the ship on this cell and is
/// kept through the Hit and Sunk transitions. Empty and Miss cells have none.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    pub(crate) status: CellStatus,
    pub(crate) occupant: Option<String>,
}

impl Cell {
    fn empty(position: Position) -> Self {
        Self {
            position,
            status: CellStatus::Empty,
            occupant: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Id of the ship on this cell, if any.
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }
}

/// A player's grid. Every board owns its cells; cloning produces an
/// independent snapshot.
///
/// Deserialized boards are checked: exactly `BOARD_SIZE` rows of
/// `BOARD_SIZE` cells, each at its own position, with an occupant on every
/// ship cell and on no other.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawBoard"))]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

/// Unchecked wire form of [`Board`].
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawBoard {
    cells: Vec<Vec<Cell>>,
}

#[cfg(feature = "std")]
impl TryFrom<RawBoard> for Board {
    type Error = EngineError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_rows(raw.cells)
    }
}

impl Board {
    /// Fresh board with every cell `Empty` and unoccupied.
    pub fn new() -> Self {
        let cells = (0..BOARD_SIZE)
            .map(|r| {
                (0..BOARD_SIZE)
                    .map(|c| Cell::empty(Position::new(r as i32, c as i32)))
                    .collect()
            })
            .collect();
        Board { cells }
    }

    /// Board from row-major cells, rejecting any grid a fresh board plus
    /// placement and shooting could not have produced.
    #[cfg(feature = "std")]
    fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        if cells.len() != BOARD_SIZE {
            return Err(EngineError::MalformedBoard(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                cells.len()
            )));
        }
        for (r, row) in cells.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(EngineError::MalformedBoard(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    BOARD_SIZE
                )));
            }
            for (c, cell) in row.iter().enumerate() {
                let expected = Position::new(r as i32, c as i32);
                if cell.position != expected {
                    return Err(EngineError::MalformedBoard(format!(
                        "cell at {} claims position {}",
                        expected, cell.position
                    )));
                }
                let needs_occupant = matches!(
                    cell.status,
                    CellStatus::Ship | CellStatus::Hit | CellStatus::Sunk
                );
                if needs_occupant != cell.occupant.is_some() {
                    return Err(EngineError::MalformedBoard(format!(
                        "{:?} cell at {} has occupant {:?}",
                        cell.status, expected, cell.occupant
                    )));
                }
            }
        }
        Ok(Board { cells })
    }

    /// Cell at `position`, or `None` when out of bounds.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        let (r, c) = position.indices()?;
        Some(&self.cells[r][c])
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        let (r, c) = position.indices()?;
        Some(&mut self.cells[r][c])
    }

    /// Status at `position`, or `None` when out of bounds.
    pub fn status(&self, position: Position) -> Option<CellStatus> {
        self.cell(position).map(Cell::status)
    }

    /// `true` iff `position` is in bounds and the cell is `Empty`.
    /// Out-of-bounds positions are never empty.
    pub fn is_cell_empty(&self, position: Position) -> bool {
        self.status(position) == Some(CellStatus::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flatten()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Positions that have not been shot at yet.
    pub fn shootable_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.status.is_shootable())
            .map(Cell::position)
            .collect()
    }

    /// Number of cells currently in `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells().filter(|cell| cell.status == status).count()
    }

    /// Text grid with column letters and 1-based row numbers. Intact ship
    /// cells are only drawn when `reveal_ships` is set.
    pub fn render(&self, reveal_ships: bool) -> String {
        let mut out = String::from("   ");
        for c in 0..BOARD_SIZE {
            out.push(' ');
            out.push((b'A' + c as u8) as char);
        }
        out.push('\n');
        for (r, row) in self.rows().enumerate() {
            out.push_str(&format!("{:2} ", r + 1));
            for cell in row {
                out.push(' ');
                out.push(cell.status.symbol(reveal_ships));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// # Panics
/// Panics if `position` is outside the grid.
impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, position: Position) -> &Cell {
        match self.cell(position) {
            Some(cell) => cell,
            None => panic!("board index {} out of bounds", position),
        }
    }
}

/// # Panics
/// Panics if `position` is outside the grid.
impl IndexMut<Position> for Board {
    fn index_mut(&mut self, position: Position) -> &mut Cell {
        match self.cell_mut(position) {
            Some(cell) => cell,
            None => panic!("board index {} out of bounds", position),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for line in self.render(true).lines() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
