//! Repeated timed trials of the duplicate finder.
//!
//! Every trial gets a fresh [`StreamGenerator`], so all trials (and all
//! strategies) search the exact same stream. Only the search itself is
//! timed; generator construction happens outside the timed region.

use tracing::{debug, info, trace};

use crate::config::FinderConfig;
use crate::error::Result;
use crate::finder::{AdaptiveFinder, Strategy, StrategyPolicy, ThresholdPolicy};
use crate::measurement::{Clock, MonotonicClock, Timer};
use crate::result::{RunReport, RunResult};
use crate::stream::{Alphabet, StreamGenerator};

/// Runs finder trials against an injected clock.
#[derive(Debug, Clone)]
pub struct TrialRunner<C: Clock = MonotonicClock> {
    config: FinderConfig,
    alphabet: Alphabet,
    timer: Timer<C>,
}

impl TrialRunner<MonotonicClock> {
    /// Runner over the master alphabet with a monotonic clock.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` cannot run on the master
    /// alphabet.
    pub fn new(config: FinderConfig) -> Result<Self> {
        Self::with_clock(config, Alphabet::master(), MonotonicClock::new())
    }
}

impl<C: Clock> TrialRunner<C> {
    /// Runner with an explicit alphabet and clock.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` does not fit `alphabet`
    /// or asks for zero runs.
    pub fn with_clock(config: FinderConfig, alphabet: Alphabet, clock: C) -> Result<Self> {
        config.validate(alphabet.len())?;
        Ok(Self {
            config,
            alphabet,
            timer: Timer::new(clock),
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// The alphabet streams draw from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The clock trials are timed with.
    pub fn clock(&self) -> &C {
        self.timer.clock()
    }

    /// Run `run_count` timed trials of `find`.
    pub fn run_trials<F>(&self, mut find: F) -> Result<Vec<RunResult>>
    where
        F: FnMut(&mut StreamGenerator, usize) -> u64,
    {
        let count = self.config.count;
        let mut runs = Vec::with_capacity(self.config.run_count);

        for trial in 0..self.config.run_count {
            let mut generator =
                StreamGenerator::new(&self.alphabet, count, self.config.chars_until)?;
            let (draws, elapsed_ms) = self.timer.time(|| find(&mut generator, count));
            trace!(trial, draws, elapsed_ms, "trial finished");
            runs.push(RunResult { elapsed_ms, draws });
        }

        Ok(runs)
    }

    /// Run all trials with one strategy.
    pub fn run_strategy(&self, label: &str, strategy: Strategy) -> Result<RunReport> {
        let runs = self.run_trials(|generator, count| strategy.find(generator, count))?;
        let report = RunReport {
            label: label.to_string(),
            strategy,
            count: self.config.count,
            runs,
        };
        debug!(
            label,
            %strategy,
            total_draws = report.total_draws(),
            total_time_ms = report.total_time_ms(),
            "strategy finished"
        );
        Ok(report)
    }

    /// Run all trials with whatever strategy `finder` selects.
    pub fn run_adaptive<P: StrategyPolicy>(&self, finder: &AdaptiveFinder<P>) -> Result<RunReport> {
        let strategy = finder.strategy_for(self.config.count);
        let runs = self.run_trials(|generator, count| finder.find(generator, count))?;
        Ok(RunReport {
            label: "adapted".to_string(),
            strategy,
            count: self.config.count,
            runs,
        })
    }

    /// Adapted run under `policy`, then the set and array strategies.
    pub fn run_all_with<P: StrategyPolicy>(&self, policy: P) -> Result<Vec<RunReport>> {
        let finder = AdaptiveFinder::new(policy);
        info!(
            strategy = %finder.strategy_for(self.config.count),
            count = self.config.count,
            "running duplicate finder benchmark"
        );
        Ok(vec![
            self.run_adaptive(&finder)?,
            self.run_strategy("set", Strategy::Set)?,
            self.run_strategy("array", Strategy::Array)?,
        ])
    }

    /// [`run_all_with`](Self::run_all_with) using the default threshold policy.
    pub fn run_all(&self) -> Result<Vec<RunReport>> {
        self.run_all_with(ThresholdPolicy::default())
    }
}
