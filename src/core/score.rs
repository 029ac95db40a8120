//! Mastermind feedback calculation and representation
//!
//! A score is the pair (hits, misses):
//! - hits = positions where guess and key hold the same symbol
//! - misses = further symbol matches at different positions
//!
//! Every peg, in the guess and in the key, is consumed by at most one match.

use super::Code;
use super::code::MAX_SYMBOLS;
use std::fmt;

/// Feedback for a guess against a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    hits: u8,
    misses: u8,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(hits: u8, misses: u8) -> Self {
        Self { hits, misses }
    }

    /// The all-hits score for codes of `pegs` length
    #[inline]
    #[must_use]
    pub const fn perfect(pegs: u8) -> Self {
        Self::new(pegs, 0)
    }

    /// Positions that matched exactly
    #[inline]
    #[must_use]
    pub const fn hits(self) -> u8 {
        self.hits
    }

    /// Symbols present in both codes but at different positions
    #[inline]
    #[must_use]
    pub const fn misses(self) -> u8 {
        self.misses
    }

    /// Check if every one of `pegs` positions matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, pegs: usize) -> bool {
        self.hits as usize == pegs && self.misses == 0
    }

    /// Calculate the score of `guess` against `key`
    ///
    /// # Algorithm
    /// 1. First pass: count hits and drop those positions from both codes
    /// 2. Second pass: for each remaining guess peg, consume one matching
    ///    remaining key peg if there is one and count a miss
    ///
    /// The result does not depend on argument order.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Score};
    ///
    /// let guess = Code::parse("1122").unwrap();
    /// let key = Code::parse("1335").unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &key), Score::new(1, 0));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, key: &Code) -> Self {
        debug_assert_eq!(guess.pegs(), key.pegs(), "codes must have the same shape");

        let mut key_available = [0u8; MAX_SYMBOLS];
        let mut hits = 0u8;

        // First pass: hits, pooling the key symbols they did not consume
        for (&g, &k) in guess.symbols().iter().zip(key.symbols()) {
            if g == k {
                hits += 1;
            } else {
                key_available[usize::from(k)] += 1;
            }
        }

        // Second pass: misses from the remaining pool
        let mut misses = 0u8;
        for (&g, &k) in guess.symbols().iter().zip(key.symbols()) {
            if g != k {
                let count = &mut key_available[usize::from(g)];
                if *count > 0 {
                    *count -= 1;
                    misses += 1;
                }
            }
        }

        Self { hits, misses }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn score_no_overlap() {
        let score = Score::calculate(&code("0000"), &code("1111"));
        assert_eq!(score, Score::new(0, 0));
    }

    #[test]
    fn score_identity() {
        for text in ["1122", "0000", "5432", "0", "abcz"] {
            let c = code(text);
            assert_eq!(Score::calculate(&c, &c), Score::perfect(c.pegs() as u8));
            assert!(Score::calculate(&c, &c).is_perfect(c.pegs()));
        }
    }

    #[test]
    fn score_opening_against_1335() {
        // Only position 0 matches; 2s never appear in the key
        let score = Score::calculate(&code("1122"), &code("1335"));
        assert_eq!(score.hits(), 1);
        assert_eq!(score.misses(), 0);
    }

    #[test]
    fn score_all_misses() {
        let score = Score::calculate(&code("1234"), &code("4321"));
        assert_eq!(score, Score::new(0, 4));
    }

    #[test]
    fn score_hit_consumes_before_miss() {
        // The 1 at position 0 is a hit, so the second 1 in the guess has
        // nothing left to match against.
        let score = Score::calculate(&code("1100"), &code("1222"));
        assert_eq!(score, Score::new(1, 0));
    }

    #[test]
    fn score_repeated_symbols_consumed_once() {
        // Key holds a single 1, guess has three of them
        let score = Score::calculate(&code("0111"), &code("1000"));
        assert_eq!(score, Score::new(0, 2));

        // Position 2 is a hit; of the two spare 1s only one finds a partner
        let score = Score::calculate(&code("1112"), &code("2311"));
        assert_eq!(score, Score::new(1, 2));
    }

    #[test]
    fn score_symmetry_exhaustive() {
        let codes: Vec<Code> = (0..81u32)
            .map(|n| {
                Code::new(&[(n / 27) as u8, (n / 9 % 3) as u8, (n / 3 % 3) as u8, (n % 3) as u8])
                    .unwrap()
            })
            .collect();

        for a in &codes {
            for b in &codes {
                assert_eq!(Score::calculate(a, b), Score::calculate(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn score_bounds_exhaustive() {
        let codes: Vec<Code> = (0..64u32)
            .map(|n| Code::new(&[(n / 16) as u8, (n / 4 % 4) as u8, (n % 4) as u8]).unwrap())
            .collect();

        for a in &codes {
            for b in &codes {
                let score = Score::calculate(a, b);
                assert!(score.hits() <= 3);
                assert!(score.misses() <= 3);
                assert!(score.hits() + score.misses() <= 3);
            }
        }
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(2, 1).to_string(), "(2, 1)");
    }
}
