//! Rules engine for two-player Battleship on a fixed 10×10 grid: placement
//! validation, shot resolution, turn sequencing with a hit bonus, victory
//! detection and a hunt/target opponent.

mod ai;
mod autoplace;
mod board;
mod combat;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod player_ai;
mod ship;
mod sim;
mod strategy;
mod turn;

pub use ai::*;
pub use autoplace::*;
pub use board::*;
pub use combat::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_str, LOG_ENV};
pub use placement::*;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use sim::*;
pub use strategy::*;
pub use turn::*;
