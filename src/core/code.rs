//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of symbols. Symbols are small integers
//! (`0..base`) and render as base-36 digits, so `[1, 1, 2, 2]` prints as `1122`.

use std::fmt;

/// Highest radix a code can be written in (`0-9` then `a-z`)
pub const MAX_SYMBOLS: usize = 36;

/// Longest supported code
pub const MAX_PEGS: usize = 16;

/// A candidate secret or guess
///
/// Ordering is lexicographic over the symbols, which matches the order the
/// code space is generated in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Box<[u8]>);

/// Error type for unparseable codes
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CodeError {
    #[display("Code must contain at least one symbol")]
    Empty,

    #[display("Invalid symbol '{_0}' (expected 0-9 or a-z)")]
    InvalidSymbol(char),

    #[display("Symbol {symbol} is out of range (must be below 36)")]
    SymbolOutOfRange { symbol: u8 },

    #[display("Code has {_0} symbols (at most 16 supported)")]
    TooLong(usize),
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from raw symbols
    ///
    /// # Errors
    /// Returns `CodeError` if `symbols` is empty, longer than `MAX_PEGS`, or
    /// holds a symbol that cannot be written as a single base-36 digit.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new(&[1, 3, 3, 5]).unwrap();
    /// assert_eq!(code.to_string(), "1335");
    /// assert_eq!(code.pegs(), 4);
    /// ```
    pub fn new(symbols: &[u8]) -> Result<Self, CodeError> {
        if symbols.is_empty() {
            return Err(CodeError::Empty);
        }

        if symbols.len() > MAX_PEGS {
            return Err(CodeError::TooLong(symbols.len()));
        }

        if let Some(&symbol) = symbols.iter().find(|&&s| usize::from(s) >= MAX_SYMBOLS) {
            return Err(CodeError::SymbolOutOfRange { symbol });
        }

        Ok(Self(symbols.into()))
    }

    /// Build a code without validation; callers guarantee symbols are in range
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        debug_assert!(!symbols.is_empty());
        Self(symbols.into_boxed_slice())
    }

    /// Parse a code written as base-36 digits
    ///
    /// Separators (`,`, `-`, whitespace) are ignored so `1,1,2,2`, `1 1 2 2`
    /// and `1122` all parse to the same code. Letters are case-insensitive.
    ///
    /// # Errors
    /// Returns `CodeError` on an empty input or a character that is not a digit.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let a = Code::parse("1122").unwrap();
    /// let b = Code::parse("1,1,2,2").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Code::parse("12?4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let symbols = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
            .map(|c| {
                c.to_digit(36)
                    .map(|d| d as u8)
                    .ok_or(CodeError::InvalidSymbol(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(&symbols)
    }

    /// The symbols of this code
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions (pegs) in this code
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> usize {
        self.0.len()
    }

    /// Check if no symbol appears more than once
    #[must_use]
    pub fn has_distinct_symbols(&self) -> bool {
        let mut seen = [false; MAX_SYMBOLS];
        self.0.iter().all(|&s| !std::mem::replace(&mut seen[usize::from(s)], true))
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in self.symbols() {
            // Symbols are validated below MAX_SYMBOLS on construction
            let digit = char::from_digit(u32::from(symbol), 36).unwrap_or('?');
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
