//! Memory of the ship currently being hunted.
//!
//! `AiState` makes no decisions of its own; the controller reasons over it.

use alloc::vec::Vec;

use crate::common::{Coord, Direction};

/// Progress on the ship currently being hunted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No unresolved hit.
    #[default]
    Idle,
    /// At least one hit on a ship that is not yet sunk. `hits` is never empty
    /// and holds no duplicates.
    Tracking {
        hits: Vec<Coord>,
        direction: Option<Direction>,
    },
}

/// Behaviour the controller is in, derived from the session and the
/// candidate stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Nothing to follow up; the next shot comes from the heatmap.
    Searching,
    /// Candidates queued without an open session.
    Targeting,
    /// One or more hits, orientation unknown.
    TrackingUndirected,
    /// Orientation known; extending the line.
    TrackingDirected,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AiState {
    session: Session,
    /// Candidate stack; the last entry is tried first.
    targets: Vec<Coord>,
}

impl AiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit on the current ship, opening a session if needed.
    /// Returns `false` if `at` was already recorded.
    pub fn add_hit(&mut self, at: Coord) -> bool {
        if let Session::Tracking { hits, .. } = &mut self.session {
            if hits.contains(&at) {
                return false;
            }
            hits.push(at);
            return true;
        }
        self.session = Session::Tracking {
            hits: alloc::vec![at],
            direction: None,
        };
        true
    }

    /// Drop the session and every queued candidate.
    pub fn clear(&mut self) {
        self.session = Session::Idle;
        self.targets.clear();
    }

    pub fn is_hunting(&self) -> bool {
        matches!(self.session, Session::Tracking { .. })
    }

    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        match (&self.session, self.targets.is_empty()) {
            (Session::Idle, true) => Mode::Searching,
            (Session::Idle, false) => Mode::Targeting,
            (Session::Tracking { direction: None, .. }, _) => Mode::TrackingUndirected,
            (Session::Tracking { direction: Some(_), .. }, _) => Mode::TrackingDirected,
        }
    }

    /// Hits of the current session; empty when idle.
    pub fn hits(&self) -> &[Coord] {
        match &self.session {
            Session::Idle => &[],
            Session::Tracking { hits, .. } => hits,
        }
    }

    /// Mutable view of the hits, for reordering.
    pub fn hits_mut(&mut self) -> &mut [Coord] {
        match &mut self.session {
            Session::Idle => &mut [],
            Session::Tracking { hits, .. } => hits,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match &self.session {
            Session::Idle => None,
            Session::Tracking { direction, .. } => *direction,
        }
    }

    /// Fix or forget the orientation. Ignored while idle.
    pub fn set_direction(&mut self, dir: Option<Direction>) {
        if let Session::Tracking { direction, .. } = &mut self.session {
            *direction = dir;
        }
    }

    pub fn targets(&self) -> &[Coord] {
        &self.targets
    }

    /// Push a candidate on top of the stack. A coordinate already queued is
    /// moved to the top rather than duplicated.
    pub fn push_target(&mut self, at: Coord) {
        self.targets.retain(|&t| t != at);
        self.targets.push(at);
    }

    pub fn pop_target(&mut self) -> Option<Coord> {
        self.targets.pop()
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Keep only the candidates for which `keep` returns `true`.
    pub fn retain_targets<F: FnMut(Coord) -> bool>(&mut self, mut keep: F) {
        self.targets.retain(|&t| keep(t));
    }
}
