//! # warmup-bench
//!
//! Micro-benchmark tooling for warm-up sensitive code.
//!
//! This crate provides:
//! - A timing harness that separates the cold first call from warmed-up
//!   behaviour and reports outlier-robust statistics (median, IQR-filtered
//!   mean, min/max, outlier count, warm-up speedup)
//! - An adaptive duplicate finder that picks between a hash-set and a
//!   linear-scan vector by distinct count, with a trial driver to test the
//!   crossover point empirically
//! - Deterministic and seeded-random character streams to drive the finder
//!
//! ## Quick Start
//!
//! ```ignore
//! use warmup_bench::TimingHarness;
//!
//! let data: Vec<u64> = (0..10_000).collect();
//! let stats = TimingHarness::new().measure(|v: &Vec<u64>| v.iter().sum::<u64>(), &data)?;
//!
//! println!("cold {:.3} ms, median {:.3} ms", stats.cold_time_ms, stats.median_ms);
//! ```
//!
//! ## Injected Time
//!
//! Nothing here reads a global timer. The harness and the trial driver take
//! a [`Clock`]; tests use [`ScriptedClock`] to make timing deterministic.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod harness;
mod result;

// Functional modules
pub mod finder;
pub mod logging;
pub mod measurement;
pub mod output;
pub mod shapes;
pub mod statistics;
pub mod stream;
pub mod trial;

// Re-exports for public API
pub use config::{FinderConfig, HarnessConfig};
pub use constants::{
    DEFAULT_CHARS_UNTIL, DEFAULT_COUNT, DEFAULT_MEASUREMENTS, DEFAULT_RUN_COUNT,
    DEFAULT_WARMUP_ITERATIONS, IQR_FENCE, MASTER_ALPHABET, SIZE_THRESHOLD,
};
pub use error::{ConfigurationError, Error, Result};
pub use finder::{AdaptiveFinder, Strategy, StrategyPolicy, ThresholdPolicy};
pub use harness::TimingHarness;
pub use measurement::{Clock, MonotonicClock, ScriptedClock};
pub use result::{RunReport, RunResult, Statistics};
pub use stream::{Alphabet, CharSource, StreamGenerator};
pub use trial::TrialRunner;

/// Convenience function: measure `f(input)` with the default configuration.
///
/// Equivalent to `TimingHarness::new().measure(f, input)`.
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` mirrors
/// [`TimingHarness::measure`].
pub fn measure<I, F, T>(f: F, input: &I) -> Result<Statistics>
where
    I: ?Sized,
    F: FnMut(&I) -> T,
{
    TimingHarness::new().measure(f, input)
}
