//! Benchmark command
//!
//! Plays many independent games with random secrets and aggregates the
//! guess counts.

use crate::core::GameConfig;
use crate::solver::{Game, Strategy};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run `count` games in parallel
///
/// Game `i` draws its secret from its own `StdRng` seeded with `seed + i`, so
/// a run is reproducible regardless of how rayon schedules the games.
///
/// # Errors
///
/// Returns the first configuration or game error encountered.
pub fn run_benchmark<S: Strategy + Clone + Send + Sync>(
    config: &GameConfig,
    strategy: &S,
    count: usize,
    seed: u64,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let guesses: Vec<usize> = (0..count)
        .into_par_iter()
        .map(|index| -> Result<usize> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let mut game = Game::with_strategy(config, strategy.clone(), &mut rng)?;
            Ok(game.play()?)
        })
        .collect::<Result<_>>()?;

    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &n in &guesses {
        *distribution.entry(n).or_insert(0) += 1;
    }

    let total_guesses: usize = guesses.iter().sum();
    let average_guesses = if count > 0 {
        total_guesses as f64 / count as f64
    } else {
        0.0
    };

    info!(count, average_guesses, "benchmark complete");

    Ok(BenchmarkResult {
        total_games: count,
        total_guesses,
        average_guesses,
        min_guesses: guesses.iter().min().copied().unwrap_or(0),
        max_guesses: guesses.iter().max().copied().unwrap_or(0),
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Rules};
    use crate::solver::{FirstCandidate, MinimaxStrategy};

    #[test]
    fn benchmark_runs() {
        let config = GameConfig::default();
        let result = run_benchmark(&config, &FirstCandidate, 20, 7).unwrap();

        assert_eq!(result.total_games, 20);
        assert!(result.total_guesses >= 20);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 1296);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = GameConfig::default();
        let result = run_benchmark(&config, &MinimaxStrategy, 10, 3).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_games);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let config = GameConfig::new(Rules::new(4, 3, false).unwrap());
        let a = run_benchmark(&config, &FirstCandidate, 30, 99).unwrap();
        let b = run_benchmark(&config, &FirstCandidate, 30, 99).unwrap();

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_with_fixed_secret() {
        let config = GameConfig::default().with_secret(Code::parse("1122").unwrap());
        let result = run_benchmark(&config, &FirstCandidate, 5, 0).unwrap();

        // The opening is the secret every time
        assert_eq!(result.distribution.get(&1), Some(&5));
    }

    #[test]
    fn benchmark_empty_run() {
        let config = GameConfig::default();
        let result = run_benchmark(&config, &FirstCandidate, 0, 0).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn benchmark_invalid_config_fails() {
        let config = GameConfig::default().with_opening(Code::parse("99").unwrap());
        assert!(run_benchmark(&config, &FirstCandidate, 3, 0).is_err());
    }
}
