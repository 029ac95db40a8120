//! Code analysis command
//!
//! Shows how a guess would split the full code space by score.

use crate::core::{Code, ConfigError, Rules, Score, generate};
use crate::solver::minimax::partition_sizes;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub code: Code,
    pub total_candidates: usize,
    /// Number of distinct scores the guess can receive
    pub feedback_classes: usize,
    pub max_remaining: usize,
    pub expected_remaining: f64,
    /// Partition sizes by score, largest first
    pub partitions: Vec<(Score, usize)>,
}

/// Analyze `code` as an opening guess for `rules`
///
/// # Errors
///
/// Returns `ConfigError::InvalidOpening` if the code does not belong to the
/// code space.
pub fn analyze_code(rules: &Rules, code: &Code) -> Result<AnalysisResult, ConfigError> {
    let space = generate(rules, code)?;
    let total_candidates = space.len();

    let mut partitions: Vec<(Score, usize)> = partition_sizes(code, &space).into_iter().collect();
    partitions.sort_by(|(a, a_size), (b, b_size)| b_size.cmp(a_size).then_with(|| b.cmp(a)));

    let max_remaining = partitions.first().map_or(0, |&(_, size)| size);

    // Each score is observed with probability size / total and leaves size codes
    let expected_remaining = partitions
        .iter()
        .map(|&(_, size)| (size * size) as f64)
        .sum::<f64>()
        / total_candidates as f64;

    Ok(AnalysisResult {
        code: code.clone(),
        total_candidates,
        feedback_classes: partitions.len(),
        max_remaining,
        expected_remaining,
        partitions,
    })
}
