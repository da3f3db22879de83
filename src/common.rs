//! Common types for the targeting engine: coordinates, cell states, shot
//! results and board errors.

use core::fmt;

/// A board coordinate. Signed so that neighbours of edge cells can be formed
/// and then filtered by the board's bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One step along `dir`.
    pub fn step(self, dir: Direction) -> Coord {
        Coord::new(self.x + dir.dx, self.y + dir.dy)
    }

    /// One step against `dir`.
    pub fn step_back(self, dir: Direction) -> Coord {
        self.step(dir.reversed())
    }

    /// The four orthogonal neighbours, in east, west, south, north order.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ORTHOGONAL.into_iter().map(move |d| self.step(d))
    }

    /// All eight surrounding cells (orthogonal and diagonal).
    pub fn surrounding(self) -> impl Iterator<Item = Coord> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| Coord::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit step along exactly one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    dx: i32,
    dy: i32,
}

impl Direction {
    pub const EAST: Direction = Direction { dx: 1, dy: 0 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: 1 };
    pub const NORTH: Direction = Direction { dx: 0, dy: -1 };

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::EAST,
        Direction::WEST,
        Direction::SOUTH,
        Direction::NORTH,
    ];

    /// Step from `from` toward `to` when both share a row or a column.
    /// Returns `None` for identical or non-aligned coordinates.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        if from.x == to.x && from.y != to.y {
            Some(Direction {
                dx: 0,
                dy: (to.y - from.y).signum(),
            })
        } else if from.y == to.y && from.x != to.x {
            Some(Direction {
                dx: (to.x - from.x).signum(),
                dy: 0,
            })
        } else {
            None
        }
    }

    pub fn delta(self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn reversed(self) -> Direction {
        Direction {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self.dx != 0
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Miss,
    Hit,
    Sunk,
}

impl CellState {
    /// Cell has already been fired upon.
    pub fn is_shot(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit | CellState::Sunk)
    }

    /// Cell holds a ship segment, alive or not.
    pub fn is_ship(self) -> bool {
        matches!(self, CellState::Ship | CellState::Hit | CellState::Sunk)
    }

    /// Known to hold no live ship: either open water or a finished wreck.
    pub fn is_dead(self) -> bool {
        matches!(self, CellState::Miss | CellState::Sunk)
    }
}

/// Outcome of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Coordinate is outside the board.
    Invalid,
    /// Cell was already resolved.
    Repeat,
    Miss,
    /// Hit a ship that still has live segments.
    Hit,
    /// Hit the last live segment of a ship.
    Sunk,
}

impl ShotResult {
    /// Shot landed on a ship.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Errors returned by board setup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship placement runs off the board.
    ShipOutOfBounds,
    /// Ship placement overlaps or touches another ship.
    ShipTouches,
    /// No legal spot was found for a ship of this length.
    UnableToPlaceShip { length: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTouches => write!(f, "Ship placement touches another ship"),
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
