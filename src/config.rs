use crate::ship::ShipType;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Random draws tried per ship before auto-placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Number of distinct [`ShipType`] variants.
pub const NUM_SHIP_TYPES: usize = 4;

/// Default roster: one 4-cell, two 3-cell, three 2-cell and four 1-cell ships.
pub const DEFAULT_FLEET: [(ShipType, usize); NUM_SHIP_TYPES] = [
    (ShipType::Carrier, 1),
    (ShipType::Battleship, 2),
    (ShipType::Cruiser, 3),
    (ShipType::Submarine, 4),
];

/// Convert a ship type name (as used in ship ids and config files) to its
/// `ShipType`. Returns `None` if the name does not match any defined type.
pub fn ship_type_from_name(name: &str) -> Option<ShipType> {
    ShipType::ALL.iter().copied().find(|t| t.name() == name)
}
