use seabattle::{
    Board, Coord, Orientation, Placement, ProbabilityMap, ShotsGrid, TargetBoard, BOARD_SIZE,
};

fn corners() -> [Coord; 4] {
    let last = BOARD_SIZE as i32 - 1;
    [
        Coord::new(0, 0),
        Coord::new(last, 0),
        Coord::new(0, last),
        Coord::new(last, last),
    ]
}

fn max_density(map: &ProbabilityMap) -> u32 {
    map.grid().iter().flatten().copied().max().unwrap_or(0)
}

#[test]
fn test_empty_board_peaks_in_the_centre() {
    let board = Board::new();
    let mut map = ProbabilityMap::new();
    map.compute(&board);

    // every length and both orientations reach a corner exactly once
    for c in corners() {
        assert_eq!(map.get(c), 20);
    }
    assert_eq!(max_density(&map), 40);
    assert_eq!(map.get(Coord::new(4, 5)), 40);

    let best = map.best_cells(&ShotsGrid::new());
    assert_eq!(best.len(), 16);
    for c in best {
        assert!((3..=6).contains(&c.x) && (3..=6).contains(&c.y), "{} is not central", c);
    }
    for c in corners() {
        assert!(map.get(c) < map.get(Coord::new(4, 4)));
    }
}

#[test]
fn test_hidden_ships_do_not_change_the_map() {
    let mut board = Board::new();
    board
        .place_ship(Placement::new(Coord::new(2, 2), Orientation::Horizontal, 4))
        .unwrap();
    let mut with_fleet = ProbabilityMap::new();
    with_fleet.compute(&board);
    let mut empty = ProbabilityMap::new();
    empty.compute(&Board::new());
    assert_eq!(with_fleet, empty);
}

#[test]
fn test_miss_blocks_placements() {
    let mut board = Board::new();
    let mut map = ProbabilityMap::new();
    map.compute(&board);
    let before = map.get(Coord::new(5, 4));

    board.shoot(Coord::new(4, 4));
    map.compute(&board);
    assert_eq!(map.get(Coord::new(4, 4)), 0);
    assert!(map.get(Coord::new(5, 4)) < before);
}

#[test]
fn test_sunk_cells_score_zero_and_hits_are_allowed() {
    let mut board = Board::new();
    board
        .place_ship(Placement::new(Coord::new(0, 0), Orientation::Horizontal, 1))
        .unwrap();
    board
        .place_ship(Placement::new(Coord::new(5, 5), Orientation::Horizontal, 2))
        .unwrap();
    board.shoot(Coord::new(0, 0));
    board.shoot(Coord::new(5, 5));

    let mut map = ProbabilityMap::new();
    map.compute(&board);
    assert_eq!(map.get(Coord::new(0, 0)), 0);
    // a live hit blocks nothing
    assert_eq!(map.get(Coord::new(5, 5)), 40);
}

#[test]
fn test_full_roster_is_counted_after_a_sink() {
    let mut board = Board::new();
    board
        .place_ship(Placement::new(Coord::new(0, 0), Orientation::Horizontal, 4))
        .unwrap();
    for x in 0..4 {
        board.shoot(Coord::new(x, 0));
    }

    let mut map = ProbabilityMap::new();
    map.compute(&board);
    // far corner still counts the sunk battleship's length: 10 lengths, 2 orientations
    assert_eq!(map.get(Coord::new(9, 9)), 20);
    assert_eq!(map.get(Coord::new(2, 0)), 0);
}

#[test]
fn test_compute_is_deterministic() {
    let mut board = Board::new();
    board.shoot(Coord::new(1, 7));
    board.shoot(Coord::new(6, 2));
    let mut a = ProbabilityMap::new();
    let mut b = ProbabilityMap::new();
    a.compute(&board);
    b.compute(&board);
    b.compute(&board);
    assert_eq!(a, b);
}

#[test]
fn test_best_cells_skip_shot_cells() {
    let board = Board::new();
    let mut map = ProbabilityMap::new();
    map.compute(&board);

    let mut shots = ShotsGrid::new();
    for y in 3..=6 {
        for x in 3..=6 {
            shots.insert(Coord::new(x, y));
        }
    }
    let best = map.best_cells(&shots);
    assert!(!best.is_empty());
    for c in &best {
        assert!(!shots.contains(*c));
        assert!(map.get(*c) < 40);
    }

    for y in 0..BOARD_SIZE as i32 {
        for x in 0..BOARD_SIZE as i32 {
            shots.insert(Coord::new(x, y));
        }
    }
    assert!(map.best_cells(&shots).is_empty());
}
