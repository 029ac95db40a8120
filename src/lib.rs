//! Mastermind Solver
//!
//! A Mastermind codebreaker: it guesses, reads (hits, misses) feedback and
//! keeps only the codes consistent with everything seen so far.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameConfig, Score};
//! use mastermind_solver::solver::Game;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Score a guess directly
//! let guess = Code::parse("1122").unwrap();
//! let secret = Code::parse("1335").unwrap();
//! assert_eq!(Score::calculate(&guess, &secret), Score::new(1, 0));
//!
//! // Or let a game find the secret
//! let config = GameConfig::default().with_secret(secret.clone());
//! let mut game = Game::new(&config, &mut StdRng::seed_from_u64(0)).unwrap();
//! let guesses = game.play().unwrap();
//! println!("Solved {secret} in {guesses} guesses");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
