#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai_state;
mod bitboard;
mod board;
mod common;
mod config;
mod controller;
mod game;
#[cfg(feature = "std")]
mod logging;
mod probability;
mod ship;

pub use ai_state::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits, ShotsGrid};
pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{env_level, init_logging, init_logging_with, LOG_ENV};
pub use probability::*;
pub use ship::*;
