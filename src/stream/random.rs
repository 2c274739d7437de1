//! Ramp generator with random segment lengths.
//!
//! Like [`StreamGenerator`](super::StreamGenerator), but during the ramp the
//! index restarts from the first symbol after a random number of draws
//! (uniform in `1..=count-1`) instead of cycling, producing runs such as
//! `ab abc a abcd ...`. Collisions are therefore irregular rather than
//! periodic. After `chars_until` draws it cycles the first `count` symbols.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::Result;

use super::alphabet::Alphabet;
use super::source::CharSource;

/// Seeded random-ramp generator.
#[derive(Debug, Clone)]
pub struct RandomRampGenerator {
    ramp: Vec<char>,
    no_repeat: Vec<char>,
    chars_until: u64,
    i: u64,
    inner: usize,
    segment: usize,
    rng: Xoshiro256PlusPlus,
}

impl RandomRampGenerator {
    /// Create a generator over the first `count` symbols of `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `count` is zero or exceeds the
    /// alphabet length.
    pub fn new(alphabet: &Alphabet, count: usize, chars_until: u64, seed: u64) -> Result<Self> {
        alphabet.check_count(count)?;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let ramp = alphabet.prefix(count - 1).to_vec();
        let segment = Self::segment_len(&mut rng, ramp.len());
        Ok(Self {
            ramp,
            no_repeat: alphabet.prefix(count).to_vec(),
            chars_until,
            i: 0,
            inner: 0,
            segment,
            rng,
        })
    }

    fn segment_len(rng: &mut Xoshiro256PlusPlus, ramp_len: usize) -> usize {
        if ramp_len == 0 {
            0
        } else {
            rng.random_range(1..=ramp_len)
        }
    }

    /// Produce the next character.
    pub fn next_char(&mut self) -> char {
        self.i += 1;
        if self.i < self.chars_until && !self.ramp.is_empty() {
            if self.inner == self.segment {
                self.inner = 0;
                self.segment = Self::segment_len(&mut self.rng, self.ramp.len());
            }
            let c = self.ramp[self.inner];
            self.inner += 1;
            c
        } else {
            self.no_repeat[(self.i % self.no_repeat.len() as u64) as usize]
        }
    }
}

impl CharSource for RandomRampGenerator {
    #[inline]
    fn draw(&mut self) -> char {
        self.next_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(generator: &mut RandomRampGenerator, n: usize) -> String {
        (0..n).map(|_| generator.draw()).collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        let alphabet = Alphabet::master();
        let mut a = RandomRampGenerator::new(&alphabet, 8, 1_000, 7).unwrap();
        let mut b = RandomRampGenerator::new(&alphabet, 8, 1_000, 7).unwrap();
        assert_eq!(drawn(&mut a, 500), drawn(&mut b, 500));
    }

    #[test]
    fn test_ramp_restarts_from_first_symbol() {
        let alphabet = Alphabet::master();
        let mut generator = RandomRampGenerator::new(&alphabet, 6, 10_000, 1).unwrap();
        let stream = drawn(&mut generator, 2_000);

        // Every segment starts at 'a' and walks the ramp in order.
        let mut prev: Option<char> = None;
        for c in stream.chars() {
            assert!(c < 'f', "ramp must only use the first count-1 symbols, got {c:?}");
            if let Some(p) = prev {
                let next_in_order = (p as u8 + 1) as char;
                assert!(c == 'a' || c == next_in_order, "{p:?} followed by {c:?}");
            }
            prev = Some(c);
        }
    }

    #[test]
    fn test_switches_to_cycle() {
        let alphabet = Alphabet::master();
        let mut generator = RandomRampGenerator::new(&alphabet, 3, 4, 99).unwrap();
        let _ = drawn(&mut generator, 3);
        // i = 4, 5, 6 → "abc"[i % 3]
        assert_eq!(drawn(&mut generator, 3), "bca");
    }
}
