//! Test all secrets - comprehensive solver evaluation
//!
//! Plays one game against every code in the space and generates statistics.

use crate::core::{Code, GameConfig, generate};
use crate::solver::{Game, Strategy};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from playing every secret
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Secrets needing the most guesses, hardest first
    pub hardest: Vec<(Code, usize)>,
}

/// Play against every secret in the code space (or the first `limit` of them)
///
/// Secrets come from the configuration's rules and opening; any explicit
/// secret in `config` is ignored.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a game fails.
pub fn run_test_all<S: Strategy + Clone + Send + Sync>(
    config: &GameConfig,
    strategy: &S,
    limit: Option<usize>,
) -> Result<TestAllStatistics> {
    let space = generate(&config.rules, &config.resolve_opening()?)?;
    let secrets: Vec<Code> = space
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<(Code, usize)> = secrets
        .into_par_iter()
        .map(|secret| -> Result<(Code, usize)> {
            let game_config = config.clone().with_secret(secret.clone());
            // The secret is fixed, so the rng is never consulted
            let mut game = Game::with_strategy(
                &game_config,
                strategy.clone(),
                &mut StdRng::seed_from_u64(0),
            )?;
            let guesses = game.play()?;
            pb.inc(1);
            Ok((secret, guesses))
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &(_, n) in &results {
        *guess_distribution.entry(n).or_insert(0) += 1;
    }

    let total_guesses: usize = results.iter().map(|(_, n)| n).sum();
    let average_guesses = if results.is_empty() {
        0.0
    } else {
        total_guesses as f64 / results.len() as f64
    };

    let mut hardest = results.clone();
    hardest.sort_by(|(a, a_n), (b, b_n)| b_n.cmp(a_n).then_with(|| a.cmp(b)));
    hardest.truncate(10);

    Ok(TestAllStatistics {
        total_secrets: results.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: results.iter().map(|(_, n)| *n).max().unwrap_or(0),
        min_guesses: results.iter().map(|(_, n)| *n).min().unwrap_or(0),
        hardest,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_secrets);
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Best case:           {}", stats.min_guesses);
    println!("  Worst case:          {}", stats.max_guesses);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_secrets > 0 {
        println!(
            "  Time per secret:     {:.2}ms",
            stats.total_time.as_secs_f64() * 1000.0 / stats.total_secrets as f64
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().max().copied().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.total_secrets as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:6} ({percentage:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.hardest.iter().take(5) {
            println!("  {} ({} guesses)", secret.to_string().yellow(), guesses);
        }
    }
}
