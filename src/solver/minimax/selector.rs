//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to the lowest code,
/// so the result does not depend on thread scheduling.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let pool: Vec<Code> = ["00", "01", "10"]
///     .iter()
///     .map(|t| Code::parse(t).unwrap())
///     .collect();
///
/// let (best, max_remaining) = select_best_guess(&pool, &pool).unwrap();
/// assert_eq!(best.to_string(), "01");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .map(|guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (guess, max_remaining)
        })
        .min_by(|(a, a_max), (b, b_max)| a_max.cmp(b_max).then_with(|| a.cmp(b)))
}
