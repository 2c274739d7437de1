//! Main `TimingHarness` entry point and builder.

use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::measurement::{Clock, Collector, MonotonicClock, Timer};
use crate::result::Statistics;
use crate::statistics::summarize;

/// Warm-up aware timing harness.
///
/// Times one cold call, warms the target up with untimed calls, then takes
/// hot samples and reduces them to outlier-robust [`Statistics`].
///
/// # Example
///
/// ```ignore
/// use warmup_bench::TimingHarness;
///
/// let data: Vec<u64> = (0..10_000).collect();
/// let stats = TimingHarness::new()
///     .iterations(10_000)
///     .measurements(50)
///     .measure(|v: &Vec<u64>| v.iter().sum::<u64>(), &data)?;
///
/// println!("speedup: {:.2}x", stats.warmup_speedup());
/// ```
///
/// # Clock Injection
///
/// The harness never reads an ambient timer. Pass a [`Clock`] through
/// [`TimingHarness::with_clock`] to control time, e.g. a
/// [`ScriptedClock`](crate::measurement::ScriptedClock) in tests.
#[derive(Debug, Clone)]
pub struct TimingHarness<C: Clock = MonotonicClock> {
    config: HarnessConfig,
    timer: Timer<C>,
}

impl Default for TimingHarness<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingHarness<MonotonicClock> {
    /// Create with default configuration and a monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }

    /// Create with a reduced configuration for quick runs and tests.
    ///
    /// Settings:
    /// - 1,000 warm-up iterations (vs 1,000,000 default)
    /// - 50 measurements (vs 100 default)
    pub fn quick() -> Self {
        Self::new().iterations(1_000).measurements(50)
    }
}

impl<C: Clock> TimingHarness<C> {
    /// Create with default configuration reading the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            config: HarnessConfig::default(),
            timer: Timer::new(clock),
        }
    }

    /// Set the number of untimed warm-up calls.
    pub fn iterations(mut self, n: usize) -> Self {
        self.config.iterations = n;
        self
    }

    /// Set the number of timed hot samples.
    pub fn measurements(mut self, n: usize) -> Self {
        self.config.measurements = n;
        self
    }

    /// Replace the whole configuration.
    pub fn config_with(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The clock this harness reads.
    pub fn clock(&self) -> &C {
        self.timer.clock()
    }

    /// Measure an infallible target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the configuration is invalid.
    pub fn measure<I, F, T>(&self, mut f: F, input: &I) -> Result<Statistics>
    where
        I: ?Sized,
        F: FnMut(&I) -> T,
    {
        self.try_measure(|i| Ok::<T, Error>(f(i)), input)
    }

    /// Measure a fallible target.
    ///
    /// The target's first error aborts the run and is returned unchanged;
    /// nothing is retried. Configuration errors are converted into `E`.
    pub fn try_measure<I, F, T, E>(&self, mut f: F, input: &I) -> Result<Statistics, E>
    where
        I: ?Sized,
        F: FnMut(&I) -> Result<T, E>,
        E: From<Error>,
    {
        self.config.validate().map_err(Error::from)?;

        debug!(
            iterations = self.config.iterations,
            measurements = self.config.measurements,
            "starting harness run"
        );

        let collector = Collector::new(self.config.iterations, self.config.measurements);
        let samples = collector.try_collect(&self.timer, || f(input))?;

        Ok(summarize(samples.cold_ms, samples.hot_ms))
    }
}
