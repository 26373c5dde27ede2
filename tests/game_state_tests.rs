use battleship_rules::{
    create_fleet, place_ship, process_shot, Board, CellStatus, EngineError, FleetConfig, GamePhase,
    GameState, Orientation, Player, PlayerId, PlayerStats, Position, Ship, ShipType, ShotResult,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn placed(ships: Vec<Ship>) -> (Board, Vec<Ship>) {
    let mut board = Board::new();
    for ship in &ships {
        place_ship(&mut board, ship);
    }
    (board, ships)
}

fn sunk_submarine() -> (Board, Vec<Ship>) {
    let (mut board, mut ships) = placed(vec![Ship::placed(
        "submarine-1",
        ShipType::Submarine,
        p(0, 0),
        Orientation::Horizontal,
    )]);
    assert_eq!(process_shot(&mut board, p(0, 0), &mut ships).unwrap(), ShotResult::Sunk);
    (board, ships)
}

#[test]
fn test_new_game_state() {
    let state = GameState::new("Alice", "Bob");
    assert_eq!(state.phase(), GamePhase::Setup);
    assert_eq!(state.current_player(), PlayerId::Player1);
    assert_eq!(state.turn_count(), 0);
    assert_eq!(state.winner(), None);

    let alice = state.player(PlayerId::Player1);
    let bob = state.player(PlayerId::Player2);
    assert_eq!(alice.name(), "Alice");
    assert_eq!(bob.name(), "Bob");
    assert_eq!(alice.id(), PlayerId::Player1);
    for player in [alice, bob] {
        assert!(player.ships().is_empty());
        assert_eq!(player.ships_remaining(), 0);
        assert_eq!(player.stats(), PlayerStats::default());
        assert_eq!(*player.board(), Board::new());
    }
    assert_eq!(state.current().name(), "Alice");
    assert_eq!(state.opponent_player().name(), "Bob");
}

#[test]
fn test_initialize_builds_default_fleets() {
    let mut state = GameState::new("Alice", "Bob");
    state.initialize();
    assert_eq!(state.phase(), GamePhase::Battle);
    assert_eq!(state.current_player(), PlayerId::Player1);
    assert_eq!(state.turn_count(), 1);
    for id in [PlayerId::Player1, PlayerId::Player2] {
        assert_eq!(state.player(id).ships().len(), 10);
        assert_eq!(state.player(id).ships_remaining(), 10);
    }
}

#[test]
fn test_initialize_is_noop_outside_setup() {
    let mut state = GameState::new("Alice", "Bob");
    state.initialize();
    state.switch_turn();
    let snapshot = state.clone();
    state.initialize();
    assert_eq!(state, snapshot);
    assert_eq!(state.current_player(), PlayerId::Player2);
    assert_eq!(state.turn_count(), 2);
}

#[test]
fn test_initialize_is_noop_after_game_over() {
    let mut state = GameState::new("Alice", "Bob");
    let (board, ships) = sunk_submarine();
    state.set_player_fleet(PlayerId::Player1, board, ships).unwrap();
    state.initialize();
    assert_eq!(state.check_victory(), Some(PlayerId::Player2));

    let snapshot = state.clone();
    state.initialize();
    assert_eq!(state, snapshot);
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.winner(), Some(PlayerId::Player2));
    assert_eq!(state.turn_count(), 1);
}

#[test]
fn test_initialize_keeps_deployed_fleet() {
    let mut state = GameState::new("Alice", "Bob");
    let (board, ships) = placed(vec![
        Ship::placed("carrier-1", ShipType::Carrier, p(0, 0), Orientation::Horizontal),
        Ship::placed("cruiser-1", ShipType::Cruiser, p(5, 5), Orientation::Vertical),
    ]);
    state.set_player_fleet(PlayerId::Player1, board.clone(), ships).unwrap();
    state.initialize();

    let alice = state.player(PlayerId::Player1);
    assert_eq!(alice.ships().len(), 2);
    assert_eq!(alice.ships_remaining(), 2);
    assert_eq!(*alice.board(), board);
    assert_eq!(state.player(PlayerId::Player2).ships().len(), 10);
}

#[test]
fn test_set_player_fleet_only_in_setup() {
    let mut state = GameState::new("Alice", "Bob");
    state.initialize();
    let err = state
        .set_player_fleet(PlayerId::Player2, Board::new(), Vec::new())
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::WrongPhase {
            expected: GamePhase::Setup,
            actual: GamePhase::Battle
        }
    );
    assert_eq!(state.player(PlayerId::Player2).ships().len(), 10);
}

#[test]
fn test_switch_turn_and_opponent() {
    let mut state = GameState::new("Alice", "Bob");
    state.initialize();
    state.switch_turn();
    assert_eq!(state.current_player(), PlayerId::Player2);
    assert_eq!(state.turn_count(), 2);
    assert_eq!(state.current().name(), "Bob");
    assert_eq!(state.opponent_player().name(), "Alice");
    state.switch_turn();
    assert_eq!(state.current_player(), PlayerId::Player1);
    assert_eq!(state.turn_count(), 3);

    assert_eq!(PlayerId::Player1.opponent(), PlayerId::Player2);
    assert_eq!(PlayerId::Player2.opponent(), PlayerId::Player1);
}

#[test]
fn test_empty_fleet_is_not_destroyed() {
    let player = Player::new(PlayerId::Player1, "Alice");
    assert!(!player.is_fleet_destroyed());
}

#[test]
fn test_check_victory_ignored_during_setup() {
    let mut state = GameState::new("Alice", "Bob");
    let (board, ships) = sunk_submarine();
    state.set_player_fleet(PlayerId::Player2, board, ships).unwrap();
    assert!(state.player(PlayerId::Player2).is_fleet_destroyed());
    assert_eq!(state.player(PlayerId::Player2).ships_remaining(), 0);

    assert_eq!(state.check_victory(), None);
    assert_eq!(state.phase(), GamePhase::Setup);
    assert_eq!(state.winner(), None);
}

#[test]
fn test_check_victory_declares_intact_side() {
    let mut state = GameState::new("Alice", "Bob");
    let (board, ships) = sunk_submarine();
    state.set_player_fleet(PlayerId::Player1, board, ships).unwrap();
    state.initialize();

    assert_eq!(state.check_victory(), Some(PlayerId::Player2));
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.winner(), Some(PlayerId::Player2));
    // stored result is returned as is
    assert_eq!(state.check_victory(), Some(PlayerId::Player2));
}

#[test]
fn test_check_victory_none_while_ships_afloat() {
    let mut state = GameState::new("Alice", "Bob");
    state.initialize();
    assert_eq!(state.check_victory(), None);
    assert_eq!(state.phase(), GamePhase::Battle);
}

#[test]
fn test_alice_sinks_bobs_fleet() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut state = GameState::new("Alice", "Bob");
    state.auto_place_fleet(PlayerId::Player2, &mut rng).unwrap();
    state.initialize();
    assert_eq!(state.phase(), GamePhase::Battle);
    assert_eq!(state.current_player(), PlayerId::Player1);
    assert_eq!(state.turn_count(), 1);
    assert_eq!(state.player(PlayerId::Player1).ships().len(), 10);
    assert_eq!(state.player(PlayerId::Player2).ships().len(), 10);
    let targets: Vec<Vec<Position>> = state
        .player(PlayerId::Player2)
        .ships()
        .iter()
        .map(Ship::cells)
        .collect();

    let mut sunk = 0;
    for cells in targets {
        for position in cells {
            assert_eq!(state.current_player(), PlayerId::Player1);
            let turn = state.process_turn(position).unwrap();
            assert!(turn.error.is_none());
            assert!(turn.continues_turn);
            if turn.shot_result == ShotResult::Sunk {
                sunk += 1;
                assert!(turn.sunk_ship.as_ref().is_some_and(Ship::is_sunk));
            }
        }
    }

    assert_eq!(sunk, 10);
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.winner(), Some(PlayerId::Player1));
    assert_eq!(state.turn_count(), 1);
    let bob = state.player(PlayerId::Player2);
    assert_eq!(bob.ships_remaining(), 0);
    assert!(bob.is_fleet_destroyed());
    let stats = state.player(PlayerId::Player1).stats();
    assert_eq!(stats.shots_fired, 20);
    assert_eq!(stats.hits, 20);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.ships_destroyed, 10);
}

#[test]
fn test_auto_place_fleet_in_setup() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut state = GameState::new("Alice", "Bob");
    state.auto_place_fleet(PlayerId::Player1, &mut rng).unwrap();
    let alice = state.player(PlayerId::Player1);
    assert_eq!(alice.ships().len(), 10);
    assert_eq!(alice.ships_remaining(), 10);
    assert_eq!(alice.board().count(CellStatus::Ship), 20);
    let first_board = alice.board().clone();

    // redeploying starts from a fresh board with the same roster
    state.auto_place_fleet(PlayerId::Player1, &mut rng).unwrap();
    let alice = state.player(PlayerId::Player1);
    assert_eq!(alice.board().count(CellStatus::Ship), 20);
    assert_ne!(*alice.board(), first_board);
    let ids: Vec<_> = alice.ships().iter().map(Ship::id).collect();
    assert_eq!(ids[0], "carrier-1");
    assert_eq!(ids.len(), 10);
    assert_eq!(state.player(PlayerId::Player2).ships().len(), 0);
}

#[test]
fn test_auto_place_fleet_keeps_custom_roster() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut state = GameState::new("Alice", "Bob");
    let (board, ships) = sunk_submarine();
    state.set_player_fleet(PlayerId::Player2, board, ships).unwrap();
    state.auto_place_fleet(PlayerId::Player2, &mut rng).unwrap();

    let bob = state.player(PlayerId::Player2);
    assert_eq!(bob.ships().len(), 1);
    assert_eq!(bob.ships()[0].id(), "submarine-1");
    assert!(!bob.ships()[0].is_sunk());
    assert_eq!(bob.ships_remaining(), 1);
    assert_eq!(bob.board().count(CellStatus::Ship), 1);
    assert_eq!(bob.board().count(CellStatus::Sunk), 0);
}

#[test]
fn test_auto_place_fleet_refused_after_setup() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut state = GameState::new("Alice", "Bob");
    state.auto_place_fleet(PlayerId::Player2, &mut rng).unwrap();
    state.initialize();
    let before = state.clone();

    let err = state.auto_place_fleet(PlayerId::Player2, &mut rng).unwrap_err();
    assert_eq!(
        err,
        EngineError::WrongPhase {
            expected: GamePhase::Setup,
            actual: GamePhase::Battle
        }
    );
    assert_eq!(state, before);
}

#[test]
fn test_auto_place_default_fleet() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut state = GameState::new("Alice", "Bob");
    let mut board = Board::new();
    let mut ships = create_fleet(&FleetConfig::default());
    battleship_rules::auto_place_ships(&mut board, &mut ships, &mut rng).unwrap();
    state.set_player_fleet(PlayerId::Player1, board, ships).unwrap();
    assert_eq!(state.player(PlayerId::Player1).ships_remaining(), 10);
}
