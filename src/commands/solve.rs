//! Code solving command
//!
//! Plays one game and records every round for display.

use crate::core::{Code, GameConfig, Score};
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Game, GameState, Strategy};
use anyhow::{Context, Result};
use rand::Rng;

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    /// Total guesses used
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }
}

/// A single round in the solution
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Worst case the guess could have left, when more than one candidate remained
    pub max_remaining: Option<usize>,
}

/// Play a game to the end using `strategy`
///
/// # Errors
///
/// Returns an error if the configuration is rejected or the game breaks an
/// invariant while playing.
pub fn solve_code<S: Strategy>(
    config: &GameConfig,
    strategy: S,
    rng: &mut impl Rng,
) -> Result<SolveResult> {
    let mut game = Game::with_strategy(config, strategy, rng).context("Invalid game configuration")?;
    let mut steps = Vec::new();

    while game.state() != GameState::Solved {
        let candidates_before = game.candidate_count();
        let guess = game
            .next_guess()
            .cloned()
            .context("No candidates remaining")?;

        let max_remaining = (candidates_before > 1)
            .then(|| calculate_max_remaining(&guess, game.candidates().codes()));

        let score = game.guess(&guess)?;
        let candidates_after = game.reduce()?;

        steps.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after,
            max_remaining,
        });
    }

    Ok(SolveResult {
        secret: game.secret().clone(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::{FirstCandidate, MinimaxStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn solve_records_every_round() {
        let config = GameConfig::default().with_secret(code("1335"));
        let result = solve_code(&config, FirstCandidate, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(result.secret, code("1335"));
        assert_eq!(result.steps[0].guess, code("1122"));
        assert_eq!(result.steps[0].score, Score::new(1, 0));
        assert_eq!(result.steps[0].candidates_before, 1296);

        let last = result.steps.last().unwrap();
        assert_eq!(last.guess, code("1335"));
        assert!(last.score.is_perfect(4));
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn solve_candidates_never_grow() {
        let config = GameConfig::default().with_secret(code("5041"));
        let result = solve_code(&config, MinimaxStrategy, &mut StdRng::seed_from_u64(0)).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_reports_worst_case_only_when_ambiguous() {
        let rules = Rules::new(2, 2, false).unwrap();
        let config = GameConfig::new(rules).with_secret(code("01"));
        let result = solve_code(&config, FirstCandidate, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(result.guesses(), 2);
        // 00 splits {00, 01, 10, 11} into (2,0):1, (1,0):2, (0,0):1
        assert_eq!(result.steps[0].max_remaining, Some(2));
        assert_eq!(result.steps[1].max_remaining, Some(1));
    }

    #[test]
    fn solve_singleton_space() {
        let rules = Rules::new(1, 2, false).unwrap();
        let config = GameConfig::new(rules);
        let result = solve_code(&config, FirstCandidate, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(result.guesses(), 1);
        assert_eq!(result.steps[0].max_remaining, None);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = GameConfig::default().with_secret(code("0006"));
        let result = solve_code(&config, FirstCandidate, &mut StdRng::seed_from_u64(0));

        assert!(result.is_err());
    }
}
