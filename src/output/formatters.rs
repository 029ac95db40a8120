//! Formatting utilities for terminal output

use crate::core::Score;

/// Format a score as key pegs
///
/// One `●` per hit, one `○` per miss, padded with `·` to `pegs` positions.
#[must_use]
pub fn score_to_pegs(score: Score, pegs: usize) -> String {
    let hits = usize::from(score.hits());
    let misses = usize::from(score.misses());
    let blanks = pegs.saturating_sub(hits + misses);

    format!("{}{}{}", "●".repeat(hits), "○".repeat(misses), "·".repeat(blanks))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
