//! Ordered set of symbols a character stream draws from.

use std::collections::HashSet;

use crate::constants::MASTER_ALPHABET;
use crate::error::ConfigurationError;

/// Fixed ordered sequence of unique characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet, rejecting empty input and repeated symbols.
    pub fn new(symbols: &str) -> Result<Self, ConfigurationError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(ConfigurationError::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for &c in &symbols {
            if !seen.insert(c) {
                return Err(ConfigurationError::DuplicateSymbol(c));
            }
        }
        Ok(Self { symbols })
    }

    /// The 79-symbol master alphabet.
    pub fn master() -> Self {
        Self {
            symbols: MASTER_ALPHABET.chars().collect(),
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: an alphabet holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The first `n` symbols.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    pub fn prefix(&self, n: usize) -> &[char] {
        &self.symbols[..n]
    }

    /// Check that `count` distinct symbols can be supplied.
    pub fn check_count(&self, count: usize) -> Result<(), ConfigurationError> {
        if count == 0 {
            return Err(ConfigurationError::ZeroCount);
        }
        if count > self.len() {
            return Err(ConfigurationError::CountExceedsAlphabet {
                count,
                len: self.len(),
            });
        }
        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::master()
    }
}
