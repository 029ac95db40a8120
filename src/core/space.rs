//! Code space generation and the shrinking candidate set
//!
//! The full space is every code of the configured shape in lexicographic
//! order, with the opening guess moved to the front.

use super::config::{ConfigError, Rules};
use super::{Code, Score};

/// Enumerate every code for `rules`, with `opening` promoted to index 0
///
/// # Errors
/// Returns `ConfigError::InvalidOpening` if `opening` is not part of the space.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Rules, generate};
///
/// let rules = Rules::new(2, 2, false).unwrap();
/// let opening = Code::parse("10").unwrap();
/// let space = generate(&rules, &opening).unwrap();
///
/// let texts: Vec<String> = space.iter().map(ToString::to_string).collect();
/// assert_eq!(texts, ["10", "00", "01", "11"]);
/// ```
pub fn generate(rules: &Rules, opening: &Code) -> Result<Vec<Code>, ConfigError> {
    if !rules.contains(opening) {
        return Err(ConfigError::InvalidOpening(opening.clone()));
    }

    let mut codes = Vec::with_capacity(rules.space_size());
    codes.push(opening.clone());

    let mut prefix = Vec::with_capacity(rules.pegs());
    extend_lexicographic(rules, &mut prefix, &mut |code| {
        if code != *opening {
            codes.push(code);
        }
    });

    debug_assert_eq!(codes.len(), rules.space_size());
    Ok(codes)
}

/// Depth-first walk over the code space in lexicographic order
fn extend_lexicographic(rules: &Rules, prefix: &mut Vec<u8>, emit: &mut impl FnMut(Code)) {
    if prefix.len() == rules.pegs() {
        emit(Code::from_symbols(prefix.clone()));
        return;
    }

    for symbol in 0..rules.base() as u8 {
        if rules.distinct() && prefix.contains(&symbol) {
            continue;
        }
        prefix.push(symbol);
        extend_lexicographic(rules, prefix, emit);
        prefix.pop();
    }
}

/// The codes still consistent with every score seen so far
///
/// Only ever shrinks.
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    codes: Vec<Code>,
}

impl CandidateSpace {
    /// Start from the full space for `rules`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOpening` if `opening` is not part of the space.
    pub fn new(rules: &Rules, opening: &Code) -> Result<Self, ConfigError> {
        Ok(Self {
            codes: generate(rules, opening)?,
        })
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Remaining candidates in order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// First remaining candidate
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// Keep only codes that would have produced `score` for `guess`
    ///
    /// Returns the new number of candidates. Relative order is preserved.
    pub fn retain_consistent(&mut self, guess: &Code, score: Score) -> usize {
        self.codes
            .retain(|candidate| Score::calculate(candidate, guess) == score);
        self.codes.len()
    }

    /// Like `retain_consistent`, but leaves the space untouched and returns
    /// `None` when no candidate would survive
    pub fn try_retain_consistent(&mut self, guess: &Code, score: Score) -> Option<usize> {
        let survivors: Vec<Code> = self
            .codes
            .iter()
            .filter(|candidate| Score::calculate(candidate, guess) == score)
            .cloned()
            .collect();

        if survivors.is_empty() {
            return None;
        }

        self.codes = survivors;
        Some(self.codes.len())
    }
}
