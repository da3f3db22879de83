//! Game board: the read/shoot contract the AI targets, and the concrete
//! grid-backed board with fleet placement and shot resolution.

use core::fmt;
use log::trace;
use rand::Rng;

use crate::common::{BoardError, CellState, Coord, Direction, ShotResult};
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::{Orientation, Placement};

/// Row-major cell grid, indexed `[y][x]`.
pub type Cells = [[CellState; BOARD_SIZE]; BOARD_SIZE];

/// Attempts per ship before random placement gives up.
const PLACEMENT_ATTEMPTS: usize = 1000;
/// Whole-fleet restarts when an early layout leaves no room for a later ship.
const FLEET_ATTEMPTS: usize = 16;

/// What the AI is allowed to see and do on the opponent's board.
pub trait TargetBoard {
    /// State of the cell at `at`, or `None` outside the board.
    fn cell_state(&self, at: Coord) -> Option<CellState>;

    /// Resolve a shot at `at`.
    fn shoot(&mut self, at: Coord) -> ShotResult;

    /// Every ship segment on the board has been hit.
    fn all_ships_destroyed(&self) -> bool;

    fn is_inside(&self, at: Coord) -> bool {
        self.cell_state(at).is_some()
    }
}

/// Main board state: ship cells, hits and misses.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    ship_cells: usize,
    hits: usize,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            ship_cells: 0,
            hits: 0,
        }
    }

    /// Clear every cell and counter.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Immutable view of the cell grid.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Number of ship segments placed.
    pub fn ship_cells(&self) -> usize {
        self.ship_cells
    }

    /// Number of ship segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Whether `at` lies on the board.
    pub fn contains(at: Coord) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&at.x) && (0..n).contains(&at.y)
    }

    fn get(&self, at: Coord) -> Option<CellState> {
        if Board::contains(at) {
            Some(self.cells[at.y as usize][at.x as usize])
        } else {
            None
        }
    }

    fn set(&mut self, at: Coord, state: CellState) {
        if Board::contains(at) {
            self.cells[at.y as usize][at.x as usize] = state;
        }
    }

    /// Check a placement against the bounds and the no-touching rule: no
    /// other ship may occupy any cell of the 3×3 block around a segment.
    pub fn can_place(&self, placement: &Placement) -> Result<(), BoardError> {
        if placement.length == 0
            || !Board::contains(placement.origin)
            || !Board::contains(placement.end())
        {
            return Err(BoardError::ShipOutOfBounds);
        }
        for cell in placement.cells() {
            let touches = core::iter::once(cell)
                .chain(cell.surrounding())
                .any(|n| self.get(n).is_some_and(CellState::is_ship));
            if touches {
                return Err(BoardError::ShipTouches);
            }
        }
        Ok(())
    }

    /// Place a single ship.
    pub fn place_ship(&mut self, placement: Placement) -> Result<(), BoardError> {
        self.can_place(&placement)?;
        for cell in placement.cells() {
            self.set(cell, CellState::Ship);
            self.ship_cells += 1;
        }
        Ok(())
    }

    /// Clear the board and place the whole fleet at random, honouring the
    /// no-touching rule.
    pub fn random_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let mut last_err = BoardError::UnableToPlaceShip { length: 0 };
        for _ in 0..FLEET_ATTEMPTS {
            match self.try_random_fleet(rng) {
                Ok(()) => return Ok(()),
                Err(e) => last_err = e,
            }
        }
        self.reset();
        Err(last_err)
    }

    fn try_random_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.reset();
        for ship in FLEET.iter() {
            let placement = self.random_placement(rng, ship.length())?;
            self.place_ship(placement)?;
            trace!("Placed {} at {:?}", ship.name(), placement);
        }
        Ok(())
    }

    /// Returns a random legal placement for a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Placement, BoardError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(
                rng.random_range(0..BOARD_SIZE as i32),
                rng.random_range(0..BOARD_SIZE as i32),
            );
            let placement = Placement::new(origin, orientation, length);
            if self.can_place(&placement).is_ok() {
                return Ok(placement);
            }
        }
        Err(BoardError::UnableToPlaceShip { length })
    }

    /// A ship is sunk when walking from `at` in each axis direction across
    /// hit segments never reaches a live one.
    fn is_ship_sunk(&self, at: Coord) -> bool {
        for dir in Direction::ORTHOGONAL {
            let mut cur = at;
            while let Some(state) = self.get(cur) {
                match state {
                    CellState::Ship => return false,
                    CellState::Hit => cur = cur.step(dir),
                    _ => break,
                }
            }
        }
        true
    }

    /// Turn the contiguous run of hit segments through `at` into a wreck.
    fn mark_ship_sunk(&mut self, at: Coord) {
        self.set(at, CellState::Sunk);
        for dir in Direction::ORTHOGONAL {
            let mut cur = at.step(dir);
            while self.get(cur) == Some(CellState::Hit) {
                self.set(cur, CellState::Sunk);
                cur = cur.step(dir);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetBoard for Board {
    fn cell_state(&self, at: Coord) -> Option<CellState> {
        self.get(at)
    }

    /// Process a shot, marking hits/misses and reporting the result.
    fn shoot(&mut self, at: Coord) -> ShotResult {
        let Some(state) = self.get(at) else {
            return ShotResult::Invalid;
        };
        if state.is_shot() {
            return ShotResult::Repeat;
        }
        if state == CellState::Ship {
            self.set(at, CellState::Hit);
            self.hits += 1;
            if self.is_ship_sunk(at) {
                self.mark_ship_sunk(at);
                return ShotResult::Sunk;
            }
            return ShotResult::Hit;
        }
        self.set(at, CellState::Miss);
        ShotResult::Miss
    }

    fn all_ships_destroyed(&self) -> bool {
        self.ship_cells > 0 && self.hits == self.ship_cells
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ ship_cells: {}, hits: {} }}",
            self.ship_cells, self.hits
        )?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for state in row.iter() {
                let ch = match state {
                    CellState::Empty => '·',
                    CellState::Ship => '■',
                    CellState::Miss => 'o',
                    CellState::Hit => 'x',
                    CellState::Sunk => '#',
                };
                write!(f, "{} ", ch)?;
            }
            if y + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
