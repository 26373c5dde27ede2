//! Fleet roster construction from a type→count configuration.

use std::collections::HashMap;

use crate::config::DEFAULT_FLEET;
use crate::ship::{Ship, ShipType};

/// How many ships of a given type the fleet contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetEntry {
    pub ship_type: ShipType,
    pub count: usize,
}

/// Ordered ship type → count mapping. Ships are built in entry order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct FleetConfig {
    entries: Vec<FleetEntry>,
}

impl FleetConfig {
    pub fn new(entries: impl IntoIterator<Item = (ShipType, usize)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(ship_type, count)| FleetEntry { ship_type, count })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    /// Configured number of ships of `ship_type`.
    pub fn count(&self, ship_type: ShipType) -> usize {
        self.entries
            .iter()
            .filter(|e| e.ship_type == ship_type)
            .map(|e| e.count)
            .sum()
    }

    pub fn total_ships(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of grid cells the whole fleet covers.
    pub fn total_cells(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.count * e.ship_type.length())
            .sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FLEET)
    }
}

/// Build the unplaced fleet described by `config`.
///
/// Ids are `<type name>-<n>` with `n` counting from 1 per type, so they stay
/// unique even if a type appears in several entries.
pub fn create_fleet(config: &FleetConfig) -> Vec<Ship> {
    let mut counters: HashMap<ShipType, usize> = HashMap::new();
    let mut fleet = Vec::with_capacity(config.total_ships());
    for entry in config.entries() {
        for _ in 0..entry.count {
            let n = counters.entry(entry.ship_type).or_insert(0);
            *n += 1;
            let id = format!("{}-{}", entry.ship_type.name(), n);
            fleet.push(Ship::new(id, entry.ship_type));
        }
    }
    fleet
}

/// Ships of `ship_type` still missing from `ships` relative to `config`.
pub fn remaining_to_place(config: &FleetConfig, ships: &[Ship], ship_type: ShipType) -> usize {
    let placed = ships.iter().filter(|s| s.ship_type() == ship_type).count();
    config.count(ship_type).saturating_sub(placed)
}

/// `true` once `ships` contains every ship `config` asks for.
pub fn is_fleet_complete(config: &FleetConfig, ships: &[Ship]) -> bool {
    ShipType::ALL
        .iter()
        .all(|&t| remaining_to_place(config, ships, t) == 0)
}
