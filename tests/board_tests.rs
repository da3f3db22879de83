use seabattle::{
    ship_lengths, Board, BoardError, CellState, Coord, Orientation, Placement, ShotResult,
    TargetBoard, FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn ship(x: i32, y: i32, orientation: Orientation, length: usize) -> Placement {
    Placement::new(Coord::new(x, y), orientation, length)
}

#[test]
fn test_manual_place_and_shoot_sink() {
    let mut board = Board::new();
    board.place_ship(ship(1, 1, Orientation::Horizontal, 3)).unwrap();

    assert_eq!(board.shoot(Coord::new(1, 1)), ShotResult::Hit);
    assert_eq!(board.shoot(Coord::new(3, 1)), ShotResult::Hit);
    assert!(!board.all_ships_destroyed());
    // final segment in the middle sinks the whole run
    assert_eq!(board.shoot(Coord::new(2, 1)), ShotResult::Sunk);
    for x in 1..=3 {
        assert_eq!(board.cell_state(Coord::new(x, 1)), Some(CellState::Sunk));
    }
    assert!(board.all_ships_destroyed());

    assert_eq!(board.shoot(Coord::new(2, 1)), ShotResult::Repeat);
}

#[test]
fn test_miss_invalid_and_repeat() {
    let mut board = Board::new();
    board.place_ship(ship(5, 5, Orientation::Vertical, 2)).unwrap();

    assert_eq!(board.shoot(Coord::new(0, 0)), ShotResult::Miss);
    assert_eq!(board.cell_state(Coord::new(0, 0)), Some(CellState::Miss));
    assert_eq!(board.shoot(Coord::new(0, 0)), ShotResult::Repeat);
    assert_eq!(board.shoot(Coord::new(-1, 3)), ShotResult::Invalid);
    assert_eq!(board.shoot(Coord::new(3, 10)), ShotResult::Invalid);
    for result in [ShotResult::Miss, ShotResult::Repeat, ShotResult::Invalid] {
        assert!(!result.is_hit());
    }
    assert!(!board.is_inside(Coord::new(10, 0)));
    assert!(board.is_inside(Coord::new(9, 9)));
}

#[test]
fn test_hit_is_not_sunk_while_segment_lives() {
    let mut board = Board::new();
    board.place_ship(ship(5, 5, Orientation::Vertical, 2)).unwrap();
    let first = board.shoot(Coord::new(5, 6));
    assert_eq!(first, ShotResult::Hit);
    assert!(first.is_hit());
    assert_eq!(board.cell_state(Coord::new(5, 6)), Some(CellState::Hit));
    assert_eq!(board.hits(), 1);
    let second = board.shoot(Coord::new(5, 5));
    assert_eq!(second, ShotResult::Sunk);
    assert!(second.is_hit());
}

#[test]
fn test_fleet_roster() {
    assert_eq!(ship_lengths(), [4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);
    assert_eq!(TOTAL_SHIP_CELLS, 20);
    assert_eq!(TOTAL_SHIP_CELLS, ship_lengths().iter().sum::<usize>());
    assert_eq!(FLEET[0].name(), "Battleship");
    assert_eq!(FLEET.iter().filter(|s| s.name() == "Patrol Boat").count(), 4);
}

#[test]
fn test_no_touching_rule() {
    let mut board = Board::new();
    board.place_ship(ship(0, 0, Orientation::Horizontal, 2)).unwrap();

    // diagonal contact with (1, 0)
    assert_eq!(
        board.place_ship(ship(2, 1, Orientation::Vertical, 1)),
        Err(BoardError::ShipTouches)
    );
    // end-to-end contact
    assert_eq!(
        board.place_ship(ship(2, 0, Orientation::Horizontal, 3)),
        Err(BoardError::ShipTouches)
    );
    board.place_ship(ship(3, 0, Orientation::Horizontal, 3)).unwrap();
    assert_eq!(board.ship_cells(), 5);
}

#[test]
fn test_out_of_bounds_placement() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(ship(8, 0, Orientation::Horizontal, 3)),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship(ship(0, 7, Orientation::Vertical, 4)),
        Err(BoardError::ShipOutOfBounds)
    );
    board.place_ship(ship(0, 6, Orientation::Vertical, 4)).unwrap();
}

#[test]
fn test_empty_board_is_not_destroyed() {
    let board = Board::new();
    assert!(!board.all_ships_destroyed());
}

#[test]
fn test_random_fleet_places_every_segment() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.random_fleet(&mut rng).unwrap();
    assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS);

    let placed = board
        .cells()
        .iter()
        .flatten()
        .filter(|c| **c == CellState::Ship)
        .count();
    assert_eq!(placed, TOTAL_SHIP_CELLS);

    // placing again starts from a clean board
    board.random_fleet(&mut rng).unwrap();
    assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS);
}
