//! Configuration for harness runs and finder benchmarks.

use crate::constants::{
    DEFAULT_CHARS_UNTIL, DEFAULT_COUNT, DEFAULT_MEASUREMENTS, DEFAULT_RUN_COUNT,
    DEFAULT_WARMUP_ITERATIONS,
};
use crate::error::ConfigurationError;

/// Configuration options for `TimingHarness`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Untimed warm-up calls between the cold sample and hot sampling
    /// (default: 1,000,000).
    pub iterations: usize,

    /// Timed hot samples (default: 100).
    pub measurements: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_WARMUP_ITERATIONS,
            measurements: DEFAULT_MEASUREMENTS,
        }
    }
}

impl HarnessConfig {
    /// Reject configurations the harness cannot produce statistics for.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.measurements == 0 {
            return Err(ConfigurationError::ZeroMeasurements);
        }
        Ok(())
    }
}

/// Configuration for the set-vs-array duplicate finder benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    /// Distinct symbols to collect per run (default: 10).
    pub count: usize,

    /// Draws served from the high-repeat ramp before the no-repeat cycle
    /// (default: 800,000).
    pub chars_until: u64,

    /// Trials per finder (default: 40).
    pub run_count: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            chars_until: DEFAULT_CHARS_UNTIL,
            run_count: DEFAULT_RUN_COUNT,
        }
    }
}

impl FinderConfig {
    /// Override the distinct count, keeping the other defaults.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Reject configurations that would index past the alphabet or never run.
    pub fn validate(&self, alphabet_len: usize) -> Result<(), ConfigurationError> {
        if self.count == 0 {
            return Err(ConfigurationError::ZeroCount);
        }
        if self.count > alphabet_len {
            return Err(ConfigurationError::CountExceedsAlphabet {
                count: self.count,
                len: alphabet_len,
            });
        }
        if self.run_count == 0 {
            return Err(ConfigurationError::ZeroRuns);
        }
        Ok(())
    }
}
