#![allow(dead_code)]

use seabattle::{CellState, Coord, ShotResult, TargetBoard, BOARD_SIZE};

/// Board double with hand-placed ship cells and no placement rules, so
/// shapes a real fleet could never form can still be fired at.
pub struct ScriptedBoard {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    sink_on: Vec<Coord>,
}

impl ScriptedBoard {
    pub fn with_ships<I: IntoIterator<Item = (i32, i32)>>(ships: I) -> Self {
        let mut cells = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (x, y) in ships {
            cells[y as usize][x as usize] = CellState::Ship;
        }
        Self {
            cells,
            sink_on: Vec::new(),
        }
    }

    /// Report `Sunk` when `at` is hit.
    pub fn sink_on(mut self, at: (i32, i32)) -> Self {
        self.sink_on.push(at.into());
        self
    }
}

impl TargetBoard for ScriptedBoard {
    fn cell_state(&self, at: Coord) -> Option<CellState> {
        let n = BOARD_SIZE as i32;
        if (0..n).contains(&at.x) && (0..n).contains(&at.y) {
            Some(self.cells[at.y as usize][at.x as usize])
        } else {
            None
        }
    }

    fn shoot(&mut self, at: Coord) -> ShotResult {
        let Some(state) = self.cell_state(at) else {
            return ShotResult::Invalid;
        };
        let cell = &mut self.cells[at.y as usize][at.x as usize];
        match state {
            CellState::Ship if self.sink_on.contains(&at) => {
                *cell = CellState::Sunk;
                ShotResult::Sunk
            }
            CellState::Ship => {
                *cell = CellState::Hit;
                ShotResult::Hit
            }
            CellState::Empty => {
                *cell = CellState::Miss;
                ShotResult::Miss
            }
            _ => ShotResult::Repeat,
        }
    }

    fn all_ships_destroyed(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&c| c != CellState::Ship)
    }
}

/// Fire at `at` outside the AI and record it in `shots`, as if the AI had
/// fired on an earlier turn.
pub fn pre_shoot<B: TargetBoard>(
    board: &mut B,
    shots: &mut seabattle::ShotsGrid,
    at: (i32, i32),
) -> ShotResult {
    let at = Coord::from(at);
    shots.insert(at);
    board.shoot(at)
}
