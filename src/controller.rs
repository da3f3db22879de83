//! Hunt/target decision engine.
//!
//! Each call to [`AiController::take_turn`] fires exactly one shot. While a
//! ship is being tracked the shot comes from the candidate stack kept in
//! [`AiState`]; otherwise it comes from the [`ProbabilityMap`], with ties
//! broken by the caller's random number generator.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace, warn};
use rand::Rng;

use crate::{
    ai_state::AiState,
    bitboard::ShotsGrid,
    board::TargetBoard,
    common::{CellState, Coord, Direction, ShotResult},
    probability::ProbabilityMap,
};

/// Which side should fire next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The controller keeps the move after a hit.
    Controller,
    /// A miss hands the move over.
    Opponent,
}

/// Current status of a game, seen from the controller's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Everything the turn orchestrator needs to know about one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub target: Coord,
    pub result: ShotResult,
    pub next: Side,
    pub status: GameStatus,
}

impl TurnOutcome {
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The controller's side destroyed the last opposing ship.
    pub fn controller_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Errors returned by [`AiController::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiError {
    /// Every cell has already been shot. Callers must end the game once the
    /// last ship sinks instead of asking for another turn.
    BoardExhausted,
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::BoardExhausted => write!(f, "No unshot cell left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AiError {}

/// Stateful AI opponent. One instance per game.
#[derive(Debug, Clone, Default)]
pub struct AiController {
    state: AiState,
    prob: ProbabilityMap,
}

impl AiController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured tracking state.
    pub fn from_state(state: AiState) -> Self {
        Self {
            state,
            prob: ProbabilityMap::new(),
        }
    }

    /// Forget everything about the current game.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    pub fn state(&self) -> &AiState {
        &self.state
    }

    /// Heatmap from the most recent search turn.
    pub fn probability_map(&self) -> &ProbabilityMap {
        &self.prob
    }

    /// Fire one shot at `board`, recording it in `shots`.
    ///
    /// `shots` must belong to this controller and match `board`'s size.
    ///
    /// # Errors
    ///
    /// [`AiError::BoardExhausted`] if no candidate is queued and every cell
    /// has been shot; the game should have ended before this call.
    pub fn take_turn<B, R>(
        &mut self,
        board: &mut B,
        shots: &mut ShotsGrid,
        rng: &mut R,
    ) -> Result<TurnOutcome, AiError>
    where
        B: TargetBoard + ?Sized,
        R: Rng + ?Sized,
    {
        let target = self.choose_target(board, shots, rng)?;
        shots.insert(target);

        let result = board.shoot(target);
        debug!("AI fires at {} -> {:?} ({:?})", target, result, self.state.mode());

        let mut outcome = TurnOutcome {
            target,
            result,
            next: Side::Controller,
            status: GameStatus::InProgress,
        };

        match result {
            ShotResult::Hit => self.handle_hit(target, false, board, shots),
            ShotResult::Sunk => {
                self.handle_hit(target, true, board, shots);
                if board.all_ships_destroyed() {
                    debug!("AI sank the last ship at {}", target);
                    outcome.status = GameStatus::Won;
                }
            }
            ShotResult::Miss => {
                if self.state.is_hunting() {
                    self.rebuild_targets(board, shots);
                }
                outcome.next = Side::Opponent;
            }
            ShotResult::Invalid | ShotResult::Repeat => {
                warn!("Board rejected AI shot at {}: {:?}", target, result);
            }
        }

        Ok(outcome)
    }

    fn choose_target<B, R>(
        &mut self,
        board: &B,
        shots: &ShotsGrid,
        rng: &mut R,
    ) -> Result<Coord, AiError>
    where
        B: TargetBoard + ?Sized,
        R: Rng + ?Sized,
    {
        self.state
            .retain_targets(|t| board.is_inside(t) && !shots.contains(t));

        if let Some(target) = self.state.pop_target() {
            trace!("Following up candidate {}", target);
            return Ok(target);
        }

        self.prob.compute(board);
        let best = self.prob.best_cells(shots);
        if best.is_empty() {
            return Err(AiError::BoardExhausted);
        }
        let pick = best[rng.random_range(0..best.len())];
        trace!(
            "Searching: {} cells tied at density {}, picked {}",
            best.len(),
            self.prob.get(pick),
            pick
        );
        Ok(pick)
    }

    /// Shot at `at` landed on a ship; `sunk` is the board's verdict.
    fn handle_hit<B>(&mut self, at: Coord, sunk: bool, board: &B, shots: &mut ShotsGrid)
    where
        B: TargetBoard + ?Sized,
    {
        self.state.add_hit(at);

        if sunk {
            let mut wreck: Vec<Coord> = self.state.hits().to_vec();
            wreck.extend(Self::wreck_cells(board, at));
            for cell in wreck {
                Self::mark_forbidden_around(cell, board, shots);
            }
            debug!("Ship sunk at {}; session closed", at);
            self.state.clear();
            return;
        }

        if self.state.hits().len() == 1 {
            self.add_neighbors(at, board, shots);
            return;
        }

        if self.state.hits().len() == 2 && self.state.direction().is_none() {
            match self.infer_direction() {
                Some(dir) => {
                    trace!("Orientation fixed: {:?}", dir);
                    self.state.set_direction(Some(dir));
                }
                None => {
                    warn!(
                        "Hits {:?} are not on one line; expanding around each",
                        self.state.hits()
                    );
                    self.rebuild_targets(board, shots);
                    return;
                }
            }
        }

        // A later hit with no orientation queues nothing new.
        self.extend_line(board, shots);
    }

    /// Segments of the sunk ship through `at`, as reported by the board.
    fn wreck_cells<B: TargetBoard + ?Sized>(board: &B, at: Coord) -> Vec<Coord> {
        let mut cells = alloc::vec![at];
        for dir in Direction::ORTHOGONAL {
            let mut cur = at.step(dir);
            while board.cell_state(cur) == Some(CellState::Sunk) {
                cells.push(cur);
                cur = cur.step(dir);
            }
        }
        cells
    }

    /// No ship may touch a sunk one, so its whole 8-neighbourhood is empty
    /// water and is recorded as shot.
    fn mark_forbidden_around<B>(at: Coord, board: &B, shots: &mut ShotsGrid)
    where
        B: TargetBoard + ?Sized,
    {
        for n in at.surrounding().filter(|&n| board.is_inside(n)) {
            shots.insert(n);
        }
    }

    fn can_shoot<B: TargetBoard + ?Sized>(at: Coord, board: &B, shots: &ShotsGrid) -> bool {
        match board.cell_state(at) {
            Some(state) => !shots.contains(at) && !state.is_dead(),
            None => false,
        }
    }

    /// Queue the shootable orthogonal neighbours of `at`.
    fn add_neighbors<B>(&mut self, at: Coord, board: &B, shots: &ShotsGrid)
    where
        B: TargetBoard + ?Sized,
    {
        if self.state.direction().is_some() {
            return;
        }
        for n in at.orthogonal_neighbors() {
            if Self::can_shoot(n, board, shots) {
                self.state.push_target(n);
            }
        }
    }

    /// Forget the orientation but keep the hits, and queue fresh neighbours
    /// around every one of them.
    fn rebuild_targets<B>(&mut self, board: &B, shots: &ShotsGrid)
    where
        B: TargetBoard + ?Sized,
    {
        self.state.set_direction(None);
        self.state.clear_targets();
        let hits = self.state.hits().to_vec();
        for h in hits {
            self.add_neighbors(h, board, shots);
        }
    }

    /// Sort the two hits by x then y and take the unit step from the first
    /// toward the second.
    fn infer_direction(&mut self) -> Option<Direction> {
        self.state.hits_mut().sort_unstable();
        match self.state.hits() {
            [first, second] => Direction::between(*first, *second),
            _ => None,
        }
    }

    /// Order the hits along the current orientation.
    fn sort_hits(&mut self) {
        let Some(dir) = self.state.direction() else {
            return;
        };
        let hits = self.state.hits_mut();
        if dir.is_horizontal() {
            hits.sort_unstable_by_key(|h| h.x);
        } else {
            hits.sort_unstable_by_key(|h| h.y);
        }
    }

    /// Queue the next cell past the far end of the line, or failing that the
    /// cell before the near end. With both ends closed the ship cannot be
    /// followed any further and the session is dropped.
    fn extend_line<B>(&mut self, board: &B, shots: &ShotsGrid)
    where
        B: TargetBoard + ?Sized,
    {
        let Some(dir) = self.state.direction() else {
            return;
        };
        self.sort_hits();
        let (first, last) = match self.state.hits() {
            [first, .., last] => (*first, *last),
            [only] => (*only, *only),
            [] => return,
        };

        let forward = last.step(dir);
        if Self::can_shoot(forward, board, shots) {
            self.state.push_target(forward);
            return;
        }

        let backward = first.step_back(dir);
        if Self::can_shoot(backward, board, shots) {
            self.state.push_target(backward);
            return;
        }

        warn!("Both ends of {:?} are closed without a sink", self.state.hits());
        self.state.clear();
    }
}
