//! Display functions for command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the transcript of a solved game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let pegs = result.secret.pegs();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess.to_string().bold(),
            score_to_pegs(step.score, pegs),
            format!("({} hits, {} misses)", step.score.hits(), step.score.misses()).bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(max_remaining) = step.max_remaining {
                println!("  Worst case: {max_remaining} candidates");
            }
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", result.guesses())
            .green()
            .bold()
    );
}

/// Print how a guess splits the code space
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.code.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!("   Feedback classes: {}", result.feedback_classes);
    println!(
        "   Worst case:       {}",
        format!("{} candidates remain", result.max_remaining).bright_yellow()
    );
    println!(
        "   Expected:         {:.1} candidates remain",
        result.expected_remaining
    );

    let pegs = result.code.pegs();
    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    for &(score, size) in &result.partitions {
        let bar = create_progress_bar(size as f64, result.max_remaining as f64, 30);
        println!(
            "   {} {} {size:6}",
            score_to_pegs(score, pegs),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
