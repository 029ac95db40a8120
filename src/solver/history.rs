//! Append-only log of played rounds

use crate::core::{Code, Score};

/// One played round: the guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    guess: Code,
    score: Score,
}

impl Round {
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }
}

/// Guesses made so far, in order
///
/// Rounds can be read but only the game can append them.
#[derive(Debug, Clone, Default)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    pub(crate) fn record(&mut self, guess: Code, score: Score) {
        self.rounds.push(Round { guess, score });
    }

    /// Number of rounds played
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Most recent round
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Round> {
        self.rounds.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Round] {
        &self.rounds
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
