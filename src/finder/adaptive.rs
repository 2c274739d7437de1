//! Strategy selection by distinct count.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::SIZE_THRESHOLD;
use crate::stream::CharSource;

use super::array::find_with_array;
use super::set::find_with_set;

/// Backing structure of a duplicate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Hash-set membership.
    Set,
    /// Linear vector scan.
    Array,
}

impl Strategy {
    /// Run the search with this strategy.
    pub fn find<S>(self, source: &mut S, count: usize) -> u64
    where
        S: CharSource + ?Sized,
    {
        match self {
            Strategy::Set => find_with_set(source, count),
            Strategy::Array => find_with_array(source, count),
        }
    }

    /// Lowercase name, as printed in reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Set => "set",
            Strategy::Array => "array",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decides which strategy handles a given distinct count.
pub trait StrategyPolicy {
    /// Pick a strategy for `count`.
    fn select(&self, count: usize) -> Strategy;
}

/// A bare strategy always selects itself.
impl StrategyPolicy for Strategy {
    fn select(&self, _count: usize) -> Strategy {
        *self
    }
}

impl<P: StrategyPolicy + ?Sized> StrategyPolicy for &P {
    fn select(&self, count: usize) -> Strategy {
        (**self).select(count)
    }
}

/// Set at or above `threshold`, array below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    /// Smallest count handled by the set strategy.
    pub threshold: usize,
}

impl ThresholdPolicy {
    /// Policy with a custom crossover point.
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(SIZE_THRESHOLD)
    }
}

impl StrategyPolicy for ThresholdPolicy {
    fn select(&self, count: usize) -> Strategy {
        if count >= self.threshold {
            Strategy::Set
        } else {
            Strategy::Array
        }
    }
}

/// Duplicate finder that delegates to the strategy its policy selects.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveFinder<P = ThresholdPolicy> {
    policy: P,
}

impl<P: StrategyPolicy> AdaptiveFinder<P> {
    /// Create a finder with the given policy.
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// The policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Strategy that would handle `count`.
    pub fn strategy_for(&self, count: usize) -> Strategy {
        self.policy.select(count)
    }

    /// Count draws until `count` consecutive distinct characters are seen.
    pub fn find<S>(&self, source: &mut S, count: usize) -> u64
    where
        S: CharSource + ?Sized,
    {
        let strategy = self.strategy_for(count);
        let draws = strategy.find(source, count);
        trace!(%strategy, count, draws, "adaptive search finished");
        draws
    }
}
