//! Mastermind solving algorithms
//!
//! The deduction loop and the strategies it can use to pick guesses.

mod game;
mod history;
pub mod minimax;
pub mod strategy;

pub use game::{Game, GameError, GameState};
pub use history::{History, Round};
pub use strategy::{FirstCandidate, MinimaxStrategy, Strategy, StrategyType};
