use proptest::prelude::*;
use seabattle::{AiState, Coord, Direction, Mode, Session};

#[test]
fn test_new_state_is_searching() {
    let state = AiState::new();
    assert!(!state.is_hunting());
    assert!(!state.has_targets());
    assert_eq!(state.mode(), Mode::Searching);
    assert_eq!(state.session(), &Session::Idle);
    assert!(state.hits().is_empty());
    assert_eq!(state.direction(), None);
}

#[test]
fn test_first_hit_opens_a_session() {
    let mut state = AiState::new();
    assert!(state.add_hit(Coord::new(4, 4)));
    assert!(state.is_hunting());
    assert_eq!(state.mode(), Mode::TrackingUndirected);
    assert_eq!(state.hits(), &[Coord::new(4, 4)]);
}

#[test]
fn test_adding_the_same_hit_twice_is_a_no_op() {
    let mut once = AiState::new();
    once.add_hit(Coord::new(1, 1));

    let mut twice = AiState::new();
    twice.add_hit(Coord::new(1, 1));
    assert!(!twice.add_hit(Coord::new(1, 1)));

    assert_eq!(once, twice);
}

#[test]
fn test_direction_is_ignored_while_idle() {
    let mut state = AiState::new();
    state.set_direction(Some(Direction::EAST));
    assert_eq!(state.direction(), None);

    state.add_hit(Coord::new(2, 2));
    state.add_hit(Coord::new(3, 2));
    state.set_direction(Some(Direction::EAST));
    assert_eq!(state.direction(), Some(Direction::EAST));
    assert_eq!(state.mode(), Mode::TrackingDirected);
}

#[test]
fn test_clear_resets_everything() {
    let mut state = AiState::new();
    state.add_hit(Coord::new(2, 2));
    state.add_hit(Coord::new(2, 3));
    state.set_direction(Some(Direction::SOUTH));
    state.push_target(Coord::new(2, 4));

    state.clear();
    assert_eq!(state, AiState::new());
}

#[test]
fn test_targets_are_a_stack() {
    let mut state = AiState::new();
    state.push_target(Coord::new(0, 1));
    state.push_target(Coord::new(0, 2));
    assert_eq!(state.mode(), Mode::Targeting);
    assert_eq!(state.pop_target(), Some(Coord::new(0, 2)));
    assert_eq!(state.pop_target(), Some(Coord::new(0, 1)));
    assert_eq!(state.pop_target(), None);
}

#[test]
fn test_requeued_target_moves_to_top() {
    let mut state = AiState::new();
    state.push_target(Coord::new(1, 0));
    state.push_target(Coord::new(2, 0));
    state.push_target(Coord::new(1, 0));
    assert_eq!(state.targets(), &[Coord::new(2, 0), Coord::new(1, 0)]);

    state.retain_targets(|t| t.x != 1);
    assert_eq!(state.targets(), &[Coord::new(2, 0)]);
}

proptest! {
    #[test]
    fn hit_recording_is_idempotent(cells in prop::collection::vec((0i32..10, 0i32..10), 1..12)) {
        let mut once = AiState::new();
        let mut twice = AiState::new();
        for &(x, y) in &cells {
            once.add_hit(Coord::new(x, y));
            twice.add_hit(Coord::new(x, y));
            twice.add_hit(Coord::new(x, y));
        }
        prop_assert_eq!(&once, &twice);

        let mut unique = cells.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(once.hits().len(), unique.len());
        prop_assert!(once.is_hunting());
    }
}
