//! Simple interactive CLI mode
//!
//! The player thinks of a secret and types the feedback for each suggested
//! guess; the solver narrows the candidates from that feedback alone.

use crate::core::{CandidateSpace, Code, ConfigError, Rules, Score};
use crate::output::formatters::score_to_pegs;
use crate::solver::Strategy;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Parse feedback typed as `HITS MISSES` (e.g. `1 2`, `1,2` or `12`)
///
/// Counts of ten or more need a separator (`10 1`); the compact form takes
/// one digit each.
///
/// Also accepts `win` for a perfect score. Returns `None` for anything that is
/// not a possible score with `pegs` positions.
#[must_use]
pub fn parse_feedback(input: &str, pegs: usize) -> Option<Score> {
    let input = input.trim();
    if matches!(input, "win" | "correct" | "solved") {
        return Some(Score::perfect(pegs as u8));
    }

    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|part| !part.is_empty())
        .collect();

    let (hits, misses): (usize, usize) = match parts.as_slice() {
        [hits, misses] => (hits.parse().ok()?, misses.parse().ok()?),
        // Compact form: one digit each
        [compact] if compact.len() == 2 => {
            let mut digits = compact.chars().map(|c| c.to_digit(10));
            (digits.next()?? as usize, digits.next()?? as usize)
        }
        _ => return None,
    };

    // pegs - 1 hits with one miss is impossible: the miss would have to swap
    // places with an already matched peg
    let possible = hits.checked_add(misses).is_some_and(|total| total <= pegs)
        && !(hits + 1 == pegs && misses == 1);
    possible.then(|| Score::new(hits as u8, misses as u8))
}

/// Replay recorded rounds against a fresh code space
///
/// # Errors
///
/// Returns `ConfigError` if `opening` does not fit `rules`.
pub fn rebuild_candidates(
    rules: &Rules,
    opening: &Code,
    rounds: &[(Code, Score)],
) -> Result<CandidateSpace, ConfigError> {
    let mut candidates = CandidateSpace::new(rules, opening)?;
    for (guess, score) in rounds {
        candidates.retain_consistent(guess, *score);
    }
    Ok(candidates)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// opening does not fit the rules.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S: Strategy>(rules: &Rules, opening: &Code, strategy: &S) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Think of a secret: {} symbols from 0-{}{}.",
        rules.pegs(),
        rules.base() - 1,
        if rules.distinct() { ", no repeats" } else { "" }
    );
    println!("After each guess, enter the feedback as HITS MISSES (e.g. '1 2'),");
    println!("or type 'win' if I got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut rounds: Vec<(Code, Score)> = Vec::new();
    let mut candidates = rebuild_candidates(rules, opening, &rounds)?;

    loop {
        if candidates.is_empty() {
            println!("\n❌ No codes match that feedback! One of the answers may be wrong.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" | "u" => {
                    rounds.pop();
                    candidates = rebuild_candidates(rules, opening, &rounds)?;
                }
                "new" | "n" => {
                    rounds.clear();
                    candidates = rebuild_candidates(rules, opening, &rounds)?;
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => return Ok(()),
                _ => {}
            }
            continue;
        }

        let turn = rounds.len() + 1;
        let guess = if rounds.is_empty() || candidates.len() == 1 {
            candidates.first()
        } else {
            strategy.select_guess(candidates.codes())
        };
        let Some(guess) = guess.cloned() else {
            anyhow::bail!("Strategy returned no guess");
        };

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", candidates.len());
        println!("────────────────────────────────────────────────────────────");
        println!("\n📊 Suggested guess: {}\n", guess.to_string().bright_yellow().bold());

        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in candidates.codes() {
                println!("  • {candidate}");
            }
            println!();
        }

        let input = get_user_input("Feedback (HITS MISSES, 'win', or command)")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                rounds.clear();
                candidates = rebuild_candidates(rules, opening, &rounds)?;
                println!("\n🔄 New game started!\n");
            }
            "undo" | "u" => {
                if rounds.pop().is_some() {
                    candidates = rebuild_candidates(rules, opening, &rounds)?;
                    println!("✓ Undone! Back to turn {}\n", rounds.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            _ => {
                let Some(score) = parse_feedback(&input, rules.pegs()) else {
                    println!("❌ Invalid feedback! Enter two numbers like '1 2', or 'win'\n");
                    continue;
                };

                candidates.retain_consistent(&guess, score);
                rounds.push((guess, score));

                if score.is_perfect(rules.pegs()) {
                    println!("\n{}", "═".repeat(70).bright_cyan());
                    let noun = if turn == 1 { "guess" } else { "guesses" };
                    println!(
                        "{}",
                        format!("    🎉  Solved in {turn} {noun}!  🎉")
                            .bright_green()
                            .bold()
                    );
                    println!("{}", "═".repeat(70).bright_cyan());

                    println!("\n  Guess history:");
                    for (i, (code, score)) in rounds.iter().enumerate() {
                        println!(
                            "    {}. {} {}",
                            (i + 1).to_string().bright_black(),
                            code.to_string().bright_white().bold(),
                            score_to_pegs(*score, rules.pegs())
                        );
                    }
                    println!();

                    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                        "yes" | "y" => {
                            rounds.clear();
                            candidates = rebuild_candidates(rules, opening, &rounds)?;
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
