//! Ship types and the per-ship damage record.

use core::fmt;

use crate::common::Position;
use crate::config::NUM_SHIP_TYPES;
use crate::placement::ship_cells;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// (row, col) step between consecutive footprint cells.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Class of ship. The length is looked up per variant, never derived from the
/// discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
}

impl ShipType {
    pub const ALL: [ShipType; NUM_SHIP_TYPES] = [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Cruiser,
        ShipType::Submarine,
    ];

    /// Number of cells a ship of this type occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Carrier => 4,
            ShipType::Battleship => 3,
            ShipType::Cruiser => 2,
            ShipType::Submarine => 1,
        }
    }

    /// Lowercase name used as the prefix of ship ids.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "carrier",
            ShipType::Battleship => "battleship",
            ShipType::Cruiser => "cruiser",
            ShipType::Submarine => "submarine",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship in a player's fleet.
///
/// Anchor and orientation are set once during placement. Damage (`hits`,
/// `is_sunk`) is only changed by the combat resolver, and `is_sunk` holds
/// exactly when `hits >= length`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: String,
    ship_type: ShipType,
    length: usize,
    anchor: Position,
    orientation: Orientation,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// Unplaced ship: anchor (0, 0), horizontal, undamaged.
    pub fn new(id: impl Into<String>, ship_type: ShipType) -> Self {
        Self {
            id: id.into(),
            ship_type,
            length: ship_type.length(),
            anchor: Position::new(0, 0),
            orientation: Orientation::Horizontal,
            hits: 0,
            sunk: false,
        }
    }

    /// Ship with its placement already decided.
    pub fn placed(
        id: impl Into<String>,
        ship_type: ShipType,
        anchor: Position,
        orientation: Orientation,
    ) -> Self {
        let mut ship = Self::new(id, ship_type);
        ship.set_placement(anchor, orientation);
        ship
    }

    /// Record where the ship goes. Does not touch any board.
    pub fn set_placement(&mut self, anchor: Position, orientation: Orientation) {
        self.anchor = anchor;
        self.orientation = orientation;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Top-left cell of the footprint.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Cells covered by this ship.
    pub fn cells(&self) -> Vec<Position> {
        ship_cells(self.anchor, self.length, self.orientation)
    }

    /// Count one more hit. Returns `true` if this hit sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.hits += 1;
        if !self.sunk && self.hits >= self.length {
            self.sunk = true;
            return true;
        }
        false
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: \"{}\", anchor: {}, orientation: {:?}, hits: {}/{}, sunk: {} }}",
            self.id, self.anchor, self.orientation, self.hits, self.length, self.sunk,
        )
    }
}
