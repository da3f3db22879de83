use core::fmt;
use log::{debug, info};
use rand::Rng;

use crate::{
    bitboard::ShotsGrid,
    board::{Board, TargetBoard},
    common::BoardError,
    controller::{AiController, AiError, GameStatus, Side, TurnOutcome},
};

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameReport {
    pub winner: Seat,
    /// Number of `take_turn` calls across both seats.
    pub turns: usize,
    /// Shots fired by each seat.
    pub shots: [usize; 2],
}

/// Errors that stop a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Fleet placement failed.
    Setup(BoardError),
    /// A controller was asked to move with nothing left to shoot.
    Ai { seat: Seat, error: AiError },
    /// The match already has a winner.
    Finished,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Setup(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Setup(e) => write!(f, "Board setup failed: {}", e),
            GameError::Ai { seat, error } => write!(f, "{:?} seat: {}", seat, error),
            GameError::Finished => write!(f, "Game is already finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Headless AI-vs-AI match. Seat `i` owns `boards[i]` and fires at the
/// other seat's board, recording its shots in `shots[i]`.
pub struct Game {
    boards: [Board; 2],
    shots: [ShotsGrid; 2],
    ais: [AiController; 2],
    fired: [usize; 2],
    to_move: Seat,
    turns: usize,
    winner: Option<Seat>,
}

impl Game {
    /// Start a match with both fleets placed at random. `Seat::First` moves
    /// first.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut first = Board::new();
        let mut second = Board::new();
        first.random_fleet(rng)?;
        second.random_fleet(rng)?;
        Ok(Self::from_boards(first, second))
    }

    /// Start a match on prepared boards.
    pub fn from_boards(first: Board, second: Board) -> Self {
        Self {
            boards: [first, second],
            shots: [ShotsGrid::new(); 2],
            ais: [AiController::new(), AiController::new()],
            fired: [0; 2],
            to_move: Seat::First,
            turns: 0,
            winner: None,
        }
    }

    /// Board owned by `seat`.
    pub fn board(&self, seat: Seat) -> &Board {
        &self.boards[seat.index()]
    }

    /// Shots grid `seat` keeps against its opponent.
    pub fn shots(&self, seat: Seat) -> &ShotsGrid {
        &self.shots[seat.index()]
    }

    pub fn controller(&self, seat: Seat) -> &AiController {
        &self.ais[seat.index()]
    }

    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// Status seen from `seat`.
    pub fn status(&self, seat: Seat) -> GameStatus {
        match self.winner {
            None => GameStatus::InProgress,
            Some(w) if w == seat => GameStatus::Won,
            Some(_) => GameStatus::Lost,
        }
    }

    /// Let the seat to move fire one shot.
    pub fn play_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::Finished);
        }
        let seat = self.to_move;
        let me = seat.index();
        let target = seat.other().index();

        let outcome = self.ais[me]
            .take_turn(&mut self.boards[target], &mut self.shots[me], rng)
            .map_err(|error| GameError::Ai { seat, error })?;
        self.fired[me] += 1;
        self.turns += 1;
        debug!("{:?} turn {}: {:?}", seat, self.turns, outcome);

        if outcome.is_game_over() || self.boards[target].all_ships_destroyed() {
            info!(
                "{:?} wins after {} shots ({} turns total)",
                seat, self.fired[me], self.turns
            );
            self.winner = Some(seat);
        } else if outcome.next == Side::Opponent {
            self.to_move = seat.other();
        }
        Ok(outcome)
    }

    /// Play until one fleet is destroyed.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameReport, GameError> {
        loop {
            if let Some(winner) = self.winner {
                return Ok(GameReport {
                    winner,
                    turns: self.turns,
                    shots: self.fired,
                });
            }
            self.play_turn(rng)?;
        }
    }
}
