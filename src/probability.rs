//! Placement-count heatmap over the opponent board.
//!
//! Uses no_std; the only allocation is the list of tied best cells.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    bitboard::ShotsGrid,
    board::TargetBoard,
    common::{CellState, Coord},
    config::{ship_lengths, BOARD_SIZE},
    ship::{Orientation, Placement},
};

/// Per-cell placement counts, indexed `[y][x]`.
pub type DensityGrid = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// Density of hypothetical ship placements consistent with what is known
/// about the board. Rebuilt from scratch by every call to [`compute`].
///
/// [`compute`]: ProbabilityMap::compute
#[derive(Clone, PartialEq, Eq)]
pub struct ProbabilityMap {
    map: DensityGrid,
}

impl ProbabilityMap {
    pub fn new() -> Self {
        Self {
            map: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Recount, for every cell, how many placements of every fleet length
    /// could cover it. A placement is legal when it stays on the board and
    /// avoids every miss and every sunk segment; live hits are allowed.
    ///
    /// The whole roster is counted, including ships already sunk.
    pub fn compute<B: TargetBoard + ?Sized>(&mut self, board: &B) -> &DensityGrid {
        self.map = [[0; BOARD_SIZE]; BOARD_SIZE];

        for len in ship_lengths() {
            for y in 0..BOARD_SIZE as i32 {
                for x in 0..BOARD_SIZE as i32 {
                    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                        let placement = Placement::new(Coord::new(x, y), orientation, len);
                        if Self::can_place(board, &placement) {
                            for cell in placement.cells() {
                                self.map[cell.y as usize][cell.x as usize] += 1;
                            }
                        }
                    }
                }
            }
        }

        &self.map
    }

    fn can_place<B: TargetBoard + ?Sized>(board: &B, placement: &Placement) -> bool {
        placement.cells().all(|cell| match board.cell_state(cell) {
            None => false,
            Some(CellState::Miss) | Some(CellState::Sunk) => false,
            // The AI cannot see live ships, so `Ship` counts as open water.
            Some(_) => true,
        })
    }

    /// Last computed grid.
    pub fn grid(&self) -> &DensityGrid {
        &self.map
    }

    /// Density at `at`; zero outside the board.
    pub fn get(&self, at: Coord) -> u32 {
        let n = BOARD_SIZE as i32;
        if (0..n).contains(&at.x) && (0..n).contains(&at.y) {
            self.map[at.y as usize][at.x as usize]
        } else {
            0
        }
    }

    /// All cells not yet in `shots` that share the highest density, in
    /// row-major order. Empty when every cell has been shot.
    pub fn best_cells(&self, shots: &ShotsGrid) -> Vec<Coord> {
        let mut best_score: Option<u32> = None;
        let mut best = Vec::new();

        for y in 0..BOARD_SIZE as i32 {
            for x in 0..BOARD_SIZE as i32 {
                let at = Coord::new(x, y);
                if shots.contains(at) {
                    continue;
                }
                let score = self.get(at);
                match best_score {
                    Some(b) if score < b => {}
                    Some(b) if score == b => best.push(at),
                    _ => {
                        best_score = Some(score);
                        best.clear();
                        best.push(at);
                    }
                }
            }
        }
        best
    }
}

impl Default for ProbabilityMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProbabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ProbabilityMap:")?;
        fmt::Display::fmt(self, f)
    }
}

/// Heatmap with lettered columns and numbered rows.
impl fmt::Display for ProbabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            let ch = (b'A' + x as u8) as char;
            write!(f, " {:>3}", ch)?;
        }
        writeln!(f)?;
        for (y, row) in self.map.iter().enumerate() {
            write!(f, "{:2} ", y + 1)?;
            for v in row.iter() {
                write!(f, " {:>3}", v)?;
            }
            if y + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
