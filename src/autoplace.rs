//! Random fleet placement for setup and the automated opponent.

use rand::Rng;

use crate::board::Board;
use crate::common::{EngineError, Position};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::placement::{can_place_ship, place_ship};
use crate::ship::{Orientation, Ship};

/// Place every ship in `ships` on `board` at random legal positions.
///
/// Longer ships go first. Each ship gets up to [`MAX_PLACEMENT_ATTEMPTS`]
/// random draws; accepted ships have their anchor and orientation updated.
/// Running out of attempts is a hard failure, the board may then hold a
/// partial fleet.
pub fn auto_place_ships<R: Rng + ?Sized>(
    board: &mut Board,
    ships: &mut [Ship],
    rng: &mut R,
) -> Result<(), EngineError> {
    let mut order: Vec<usize> = (0..ships.len()).collect();
    order.sort_by_key(|&i| core::cmp::Reverse(ships[i].length()));

    for i in order {
        let ship = &mut ships[i];
        let (anchor, orientation) = random_slot(board, ship.length(), rng).ok_or_else(|| {
            log::error!(
                "no slot for {} after {} attempts",
                ship.id(),
                MAX_PLACEMENT_ATTEMPTS
            );
            EngineError::PlacementExhausted {
                ship_id: ship.id().to_owned(),
                attempts: MAX_PLACEMENT_ATTEMPTS,
            }
        })?;
        ship.set_placement(anchor, orientation);
        place_ship(board, ship);
    }
    Ok(())
}

fn random_slot<R: Rng + ?Sized>(
    board: &Board,
    length: usize,
    rng: &mut R,
) -> Option<(Position, Orientation)> {
    let n = BOARD_SIZE as i32;
    (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
        let anchor = Position::new(rng.random_range(0..n), rng.random_range(0..n));
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        can_place_ship(board, anchor, length, orientation).then_some((anchor, orientation))
    })
}
