//! Minimax worst-case calculation for Mastermind scores
//!
//! Given a guess and set of candidates, computes how the candidates split by
//! the score they would produce and the size of the largest group.

use crate::core::{Code, Score};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::parse("01").unwrap();
/// let candidates = vec![
///     Code::parse("00").unwrap(),
///     Code::parse("01").unwrap(),
///     Code::parse("10").unwrap(),
/// ];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    partition_sizes(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the score they produce with the guess
///
/// Maps each reachable score to the number of candidates that would remain
/// if that score were observed.
#[must_use]
pub fn partition_sizes(guess: &Code, candidates: &[Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let score = Score::calculate(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}
