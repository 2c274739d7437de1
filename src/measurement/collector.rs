//! Sample collection in three phases: cold, warm-up, hot.
//!
//! 1. One timed call before anything else has touched the target
//! 2. `warmup_iterations` untimed calls to reach steady state
//! 3. `measurements` timed calls, strictly one after another
//!
//! A failing call aborts collection immediately; its error is returned as-is.

use std::convert::Infallible;

use tracing::{debug, trace};

use super::timer::{black_box, Clock, Timer};

/// Raw timings from one collection run, in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    /// Elapsed time of the very first call.
    pub cold_ms: f64,
    /// Elapsed times of the hot calls, in measurement order.
    pub hot_ms: Vec<f64>,
}

/// Collector for gathering cold and hot timings of a single target.
#[derive(Debug, Clone, Copy)]
pub struct Collector {
    /// Untimed calls between the cold sample and hot sampling.
    warmup_iterations: usize,
    /// Timed hot calls.
    measurements: usize,
}

impl Collector {
    /// Create a collector with the given warm-up and measurement counts.
    pub fn new(warmup_iterations: usize, measurements: usize) -> Self {
        Self {
            warmup_iterations,
            measurements,
        }
    }

    /// Number of untimed warm-up calls.
    pub fn warmup_iterations(&self) -> usize {
        self.warmup_iterations
    }

    /// Number of timed hot calls.
    pub fn measurements(&self) -> usize {
        self.measurements
    }

    /// Collect timings for an infallible target.
    pub fn collect<C, F, T>(&self, timer: &Timer<C>, mut f: F) -> Samples
    where
        C: Clock,
        F: FnMut() -> T,
    {
        match self.try_collect(timer, || Ok::<T, Infallible>(f())) {
            Ok(samples) => samples,
            Err(never) => match never {},
        }
    }

    /// Collect timings for a fallible target.
    ///
    /// The first error from `f` stops collection and is returned unchanged.
    pub fn try_collect<C, F, T, E>(&self, timer: &Timer<C>, mut f: F) -> Result<Samples, E>
    where
        C: Clock,
        F: FnMut() -> Result<T, E>,
    {
        let cold_ms = timer.try_measure_ms(&mut f)?;
        debug!(cold_ms, "cold sample taken");

        self.warmup(&mut f)?;

        let mut hot_ms = Vec::with_capacity(self.measurements);
        for _ in 0..self.measurements {
            hot_ms.push(timer.try_measure_ms(&mut f)?);
        }
        trace!(samples = hot_ms.len(), "hot sampling finished");

        Ok(Samples { cold_ms, hot_ms })
    }

    fn warmup<F, T, E>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut() -> Result<T, E>,
    {
        debug!(iterations = self.warmup_iterations, "warming up");
        for _ in 0..self.warmup_iterations {
            black_box(f()?);
        }
        Ok(())
    }
}
