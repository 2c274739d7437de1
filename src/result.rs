//! Result types produced by the harness and the trial driver.

use serde::{Deserialize, Serialize};

use crate::finder::Strategy;

/// Summary of one harness run. All times are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Elapsed time of the first, unwarmed call.
    pub cold_time_ms: f64,
    /// Median of all hot samples.
    pub median_ms: f64,
    /// Mean of the hot samples inside the IQR fences.
    pub average_ms: f64,
    /// Fastest retained hot sample.
    pub min_ms: f64,
    /// Slowest retained hot sample.
    pub max_ms: f64,
    /// Hot samples rejected as outliers.
    pub outlier_count: usize,
    /// Hot samples taken.
    pub sample_count: usize,
}

impl Statistics {
    /// How many times faster the median hot call is than the cold call.
    pub fn warmup_speedup(&self) -> f64 {
        self.cold_time_ms / self.median_ms
    }

    /// Hot samples that survived outlier filtering.
    pub fn retained_count(&self) -> usize {
        self.sample_count - self.outlier_count
    }
}

/// One trial of the duplicate finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Wall time spent in the finder.
    pub elapsed_ms: f64,
    /// Characters drawn until the distinct count was reached.
    pub draws: u64,
}

/// All trials of one finder at one distinct count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Human-readable label, e.g. `adapted` or `set`.
    pub label: String,
    /// Strategy that performed the search.
    pub strategy: Strategy,
    /// Distinct count searched for.
    pub count: usize,
    /// Trials in execution order.
    pub runs: Vec<RunResult>,
}

impl RunReport {
    /// Sum of elapsed time over all trials.
    pub fn total_time_ms(&self) -> f64 {
        self.runs.iter().map(|r| r.elapsed_ms).sum()
    }

    /// Sum of draws over all trials.
    pub fn total_draws(&self) -> u64 {
        self.runs.iter().map(|r| r.draws).sum()
    }

    /// Draws per millisecond, or `None` when no measurable time elapsed.
    pub fn throughput(&self) -> Option<f64> {
        let time = self.total_time_ms();
        if time > 0.0 {
            Some(self.total_draws() as f64 / time)
        } else {
            None
        }
    }
}
