//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// A benchmark was configured with parameters it cannot run with.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Structured output could not be produced.
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected benchmark parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Distinct count of zero.
    #[error("distinct count must be at least 1")]
    ZeroCount,

    /// Distinct count larger than the alphabet can supply.
    #[error("distinct count {count} exceeds alphabet length {len}")]
    CountExceedsAlphabet {
        /// Requested distinct count.
        count: usize,
        /// Number of symbols in the alphabet.
        len: usize,
    },

    /// Alphabet with no symbols.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// Alphabet containing the same symbol twice.
    #[error("alphabet symbol {0:?} appears more than once")]
    DuplicateSymbol(char),

    /// Harness asked to take zero hot samples.
    #[error("at least one measurement is required")]
    ZeroMeasurements,

    /// Trial driver asked to run zero trials.
    #[error("at least one run is required")]
    ZeroRuns,
}
