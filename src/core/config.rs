//! Game configuration and validation
//!
//! `Rules` fixes the shape of a game (alphabet size, code length, repeats),
//! `GameConfig` adds the optional secret and opening guess on top.

use super::Code;
use super::code::{MAX_PEGS, MAX_SYMBOLS};

/// Largest code space a game may enumerate
pub const MAX_SPACE_SIZE: usize = 1 << 20;

/// Classic Mastermind alphabet size
pub const DEFAULT_BASE: usize = 6;

/// Classic Mastermind code length
pub const DEFAULT_PEGS: usize = 4;

/// Error type for rejected configurations
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    #[display("Base must be between 1 and 36, got {_0}")]
    InvalidBase(usize),

    #[display("Pegs must be between 1 and 16, got {_0}")]
    InvalidPegs(usize),

    #[display("Cannot fill {pegs} pegs with distinct symbols from a base of {base}")]
    RepeatsRequired { base: usize, pegs: usize },

    #[display("Code space of {size} codes exceeds the limit of {limit}")]
    SpaceTooLarge { size: u128, limit: usize },

    #[display("Opening guess {_0} is not a valid code for this game")]
    InvalidOpening(Code),

    #[display("Secret {_0} is not a valid code for this game")]
    InvalidSecret(Code),
}

impl std::error::Error for ConfigError {}

/// Shape of a game: alphabet size, code length and whether symbols may repeat
///
/// A `Rules` value is always valid; the constructor rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    base: usize,
    pegs: usize,
    distinct: bool,
}

impl Rules {
    /// Create validated rules
    ///
    /// # Errors
    /// Returns `ConfigError` if `base` or `pegs` is out of range, if `distinct`
    /// is requested with more pegs than symbols, or if the code space would
    /// exceed `MAX_SPACE_SIZE`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Rules;
    ///
    /// let rules = Rules::new(6, 4, false).unwrap();
    /// assert_eq!(rules.space_size(), 1296);
    ///
    /// assert!(Rules::new(0, 4, false).is_err());
    /// assert!(Rules::new(3, 4, true).is_err());
    /// ```
    pub fn new(base: usize, pegs: usize, distinct: bool) -> Result<Self, ConfigError> {
        if base == 0 || base > MAX_SYMBOLS {
            return Err(ConfigError::InvalidBase(base));
        }

        if pegs == 0 || pegs > MAX_PEGS {
            return Err(ConfigError::InvalidPegs(pegs));
        }

        if distinct && pegs > base {
            return Err(ConfigError::RepeatsRequired { base, pegs });
        }

        let size = Self::count_codes(base, pegs, distinct);
        if size > MAX_SPACE_SIZE as u128 {
            return Err(ConfigError::SpaceTooLarge {
                size,
                limit: MAX_SPACE_SIZE,
            });
        }

        Ok(Self {
            base,
            pegs,
            distinct,
        })
    }

    fn count_codes(base: usize, pegs: usize, distinct: bool) -> u128 {
        let base = base as u128;
        if distinct {
            (0..pegs as u128).map(|i| base - i).product()
        } else {
            (0..pegs).map(|_| base).product()
        }
    }

    /// Alphabet size
    #[inline]
    #[must_use]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Code length
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> usize {
        self.pegs
    }

    /// Whether codes must use pairwise distinct symbols
    #[inline]
    #[must_use]
    pub const fn distinct(&self) -> bool {
        self.distinct
    }

    /// Number of codes in the full space
    #[must_use]
    pub fn space_size(&self) -> usize {
        // Bounded by MAX_SPACE_SIZE in the constructor
        Self::count_codes(self.base, self.pegs, self.distinct) as usize
    }

    /// Check if `code` belongs to the code space of these rules
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        code.pegs() == self.pegs
            && code.symbols().iter().all(|&s| usize::from(s) < self.base)
            && (!self.distinct || code.has_distinct_symbols())
    }

    /// Opening guess used when none is configured
    ///
    /// The classic `1122` for four pegs over at least three symbols with
    /// repeats allowed, otherwise the first code of the space.
    #[must_use]
    pub fn default_opening(&self) -> Code {
        if self.pegs == 4 && self.base >= 3 && !self.distinct {
            return Code::from_symbols(vec![1, 1, 2, 2]);
        }

        if self.distinct {
            Code::from_symbols((0..self.pegs as u8).collect())
        } else {
            Code::from_symbols(vec![0; self.pegs])
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            pegs: DEFAULT_PEGS,
            distinct: false,
        }
    }
}

/// Configuration for a single game
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub rules: Rules,
    pub secret: Option<Code>,
    pub opening: Option<Code>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self {
            rules,
            secret: None,
            opening: None,
        }
    }

    /// Play against a known secret instead of a random one
    #[must_use]
    pub fn with_secret(mut self, secret: Code) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Override the opening guess
    #[must_use]
    pub fn with_opening(mut self, opening: Code) -> Self {
        self.opening = Some(opening);
        self
    }

    /// Resolve the opening guess for this configuration
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOpening` if an explicit opening does not
    /// fit the rules.
    pub fn resolve_opening(&self) -> Result<Code, ConfigError> {
        match &self.opening {
            Some(opening) if self.rules.contains(opening) => Ok(opening.clone()),
            Some(opening) => Err(ConfigError::InvalidOpening(opening.clone())),
            None => Ok(self.rules.default_opening()),
        }
    }

    /// Check the opening and secret against the rules
    ///
    /// # Errors
    /// Returns the first `ConfigError` found, opening before secret.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve_opening()?;

        if let Some(secret) = &self.secret
            && !self.rules.contains(secret)
        {
            return Err(ConfigError::InvalidSecret(secret.clone()));
        }

        Ok(())
    }
}
