//! Ship definitions and straight-line placements.

use crate::common::{Coord, Direction};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step from one segment to the next.
    pub fn step(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::EAST,
            Orientation::Vertical => Direction::SOUTH,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of `length` cells starting at `origin`.
///
/// Placements are purely geometric and may extend past the board; callers
/// decide what to do with segments that fall outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Coord,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(origin: Coord, orientation: Orientation, length: usize) -> Self {
        Self {
            origin,
            orientation,
            length,
        }
    }

    /// Last segment of the run.
    pub fn end(&self) -> Coord {
        let back = self.length.saturating_sub(1) as i32;
        let (dx, dy) = self.orientation.step().delta();
        Coord::new(self.origin.x + dx * back, self.origin.y + dy * back)
    }

    /// Segments from origin to end.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let origin = self.origin;
        let step = self.orientation.step();
        (0..self.length as i32).map(move |i| {
            let (dx, dy) = step.delta();
            Coord::new(origin.x + dx * i, origin.y + dy * i)
        })
    }
}
