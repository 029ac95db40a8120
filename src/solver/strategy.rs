//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess among `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Always guess the first remaining candidate (default)
    FirstCandidate(FirstCandidate),
    /// Minimize the worst-case remaining candidates
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::FirstCandidate(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "first-candidate", "minimax", "knuth".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" | "first-candidate" => Some(Self::FirstCandidate(FirstCandidate)),
            "minimax" | "knuth" => Some(Self::Minimax(MinimaxStrategy)),
            _ => None,
        }
    }

    /// Canonical name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FirstCandidate(_) => "first",
            Self::Minimax(_) => "minimax",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::FirstCandidate(FirstCandidate)
    }
}

/// First remaining candidate
///
/// Cheap and always consistent with the feedback so far, but does not
/// minimize the number of rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidate;

impl Strategy for FirstCandidate {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Pure minimax strategy
///
/// Selects the candidate that minimizes the worst-case remaining candidates,
/// breaking ties by the lowest code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        super::minimax::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}
