use battleship_rules::{
    auto_place_ships, create_fleet, process_shot, Board, CellStatus, FleetConfig, Position, Ship,
    ShotResult, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_fleet(seed: u64) -> (Board, Vec<Ship>, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut ships = create_fleet(&FleetConfig::default());
    auto_place_ships(&mut board, &mut ships, &mut rng).unwrap();
    (board, ships, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn auto_placed_ships_never_touch(seed in any::<u64>()) {
        let (board, ships, _) = random_fleet(seed);
        prop_assert_eq!(board.count(CellStatus::Ship), 20);
        for ship in &ships {
            for cell in ship.cells() {
                prop_assert!(cell.is_valid());
                prop_assert_eq!(board[cell].occupant(), Some(ship.id()));
                // every neighbour holding a ship belongs to this same ship
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        let n = cell.offset(dr, dc);
                        if let Some(occupant) = board.cell(n).and_then(|c| c.occupant()) {
                            prop_assert_eq!(occupant, ship.id());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn shot_is_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE as i32, col in 0..BOARD_SIZE as i32) {
        let (mut board, mut ships, _) = random_fleet(seed);
        let target = Position::new(row, col);
        let first = process_shot(&mut board, target, &mut ships).unwrap();
        let board_after = board.clone();
        let ships_after = ships.clone();

        let second = process_shot(&mut board, target, &mut ships).unwrap();
        prop_assert_eq!(board, board_after);
        prop_assert_eq!(ships, ships_after);
        prop_assert_eq!(second.is_hit(), first.is_hit());
        prop_assert_ne!(second, ShotResult::Sunk);
    }

    #[test]
    fn hits_never_exceed_length(seed in any::<u64>()) {
        let (mut board, mut ships, mut rng) = random_fleet(seed);
        let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE * 2);
        for _ in 0..shots {
            let n = BOARD_SIZE as i32;
            let target = Position::new(rng.random_range(0..n), rng.random_range(0..n));
            process_shot(&mut board, target, &mut ships).unwrap();
        }
        for ship in &ships {
            prop_assert!(ship.hits() <= ship.length());
            prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.length());
            let damaged = ship
                .cells()
                .into_iter()
                .filter(|&c| board[c].status() != CellStatus::Ship)
                .count();
            prop_assert_eq!(damaged, ship.hits());
        }
    }
}
