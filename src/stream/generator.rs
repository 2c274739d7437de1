//! Deterministic ramp-then-cycle character stream.
//!
//! The counter `i` is incremented before each draw, so the first draw sees
//! `i = 1`. While `i < chars_until` the stream cycles the first `count - 1`
//! symbols (the ramp: a run of `count` distinct symbols can never complete).
//! From `i = chars_until` on it cycles the first `count` symbols.

use crate::error::Result;

use super::alphabet::Alphabet;
use super::source::CharSource;

/// Stateful ramp-then-cycle generator.
#[derive(Debug, Clone)]
pub struct StreamGenerator {
    ramp: Vec<char>,
    no_repeat: Vec<char>,
    chars_until: u64,
    i: u64,
}

impl StreamGenerator {
    /// Create a generator over the first `count` symbols of `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `count` is zero or exceeds the
    /// alphabet length.
    pub fn new(alphabet: &Alphabet, count: usize, chars_until: u64) -> Result<Self> {
        alphabet.check_count(count)?;
        Ok(Self {
            ramp: alphabet.prefix(count - 1).to_vec(),
            no_repeat: alphabet.prefix(count).to_vec(),
            chars_until,
            i: 0,
        })
    }

    /// Generator over the master alphabet.
    pub fn with_master(count: usize, chars_until: u64) -> Result<Self> {
        Self::new(&Alphabet::master(), count, chars_until)
    }

    /// Draws produced so far.
    pub fn position(&self) -> u64 {
        self.i
    }

    /// Whether the next draw still comes from the ramp.
    pub fn in_ramp(&self) -> bool {
        self.i + 1 < self.chars_until
    }

    /// Produce the next character.
    pub fn next_char(&mut self) -> char {
        self.i += 1;
        let i = self.i;
        if i < self.chars_until && !self.ramp.is_empty() {
            self.ramp[(i % self.ramp.len() as u64) as usize]
        } else {
            // A single-symbol stream has no ramp and repeats its one symbol.
            self.no_repeat[(i % self.no_repeat.len() as u64) as usize]
        }
    }
}

impl CharSource for StreamGenerator {
    #[inline]
    fn draw(&mut self) -> char {
        self.next_char()
    }
}

impl Iterator for StreamGenerator {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(self.next_char())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, Error};

    #[test]
    fn test_ramp_then_cycle() {
        let generator = StreamGenerator::with_master(5, 10).unwrap();
        let drawn: String = generator.take(12).collect();
        // i = 1..=9 → "abcd"[i % 4]; i = 10..=12 → "abcde"[i % 5]
        assert_eq!(drawn, "bcdabcdababc");
    }

    #[test]
    fn test_no_ramp_is_pure_cycle() {
        let mut generator = StreamGenerator::with_master(3, 0).unwrap();
        let drawn: String = (0..6).map(|_| generator.draw()).collect();
        assert_eq!(drawn, "bcabca");
        assert_eq!(generator.position(), 6);
    }

    #[test]
    fn test_single_symbol() {
        let generator = StreamGenerator::with_master(1, 100).unwrap();
        assert!(generator.take(200).all(|c| c == 'a'));
    }

    #[test]
    fn test_in_ramp() {
        let mut generator = StreamGenerator::with_master(4, 3).unwrap();
        assert!(generator.in_ramp());
        generator.draw();
        assert!(generator.in_ramp());
        generator.draw();
        assert!(!generator.in_ramp());
    }

    #[test]
    fn test_rejects_oversized_count() {
        let err = StreamGenerator::with_master(80, 10).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::CountExceedsAlphabet { count: 80, len: 79 })
        ));
    }
}
