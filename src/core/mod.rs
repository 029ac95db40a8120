//! Core domain types for Mastermind
//!
//! Codes, feedback scores, game rules and the code space. Everything here is
//! pure and deterministic; the game loop lives in `solver`.

mod code;
mod config;
mod score;
mod space;

pub use code::{Code, CodeError, MAX_PEGS, MAX_SYMBOLS};
pub use config::{ConfigError, DEFAULT_BASE, DEFAULT_PEGS, GameConfig, MAX_SPACE_SIZE, Rules};
pub use score::Score;
pub use space::{CandidateSpace, generate};
