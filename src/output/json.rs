//! JSON serialization for harness and finder results.

use serde::Serialize;

use crate::result::{RunReport, Statistics};

/// A named harness result, as emitted by the binaries.
#[derive(Debug, Clone, Serialize)]
pub struct NamedStatistics<'a> {
    /// What was measured.
    pub name: &'a str,
    /// Its statistics.
    #[serde(flatten)]
    pub statistics: &'a Statistics,
    /// `cold_time_ms / median_ms`.
    pub warmup_speedup: f64,
}

impl<'a> NamedStatistics<'a> {
    /// Pair a name with its statistics.
    pub fn new(name: &'a str, statistics: &'a Statistics) -> Self {
        Self {
            name,
            statistics,
            warmup_speedup: statistics.warmup_speedup(),
        }
    }
}

/// Serialize any result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for result types).
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Serialize finder reports, including their derived totals.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn reports_to_json(reports: &[RunReport]) -> Result<String, serde_json::Error> {
    let values: Vec<serde_json::Value> = reports
        .iter()
        .map(|r| {
            serde_json::json!({
                "label": r.label,
                "strategy": r.strategy,
                "count": r.count,
                "total_time_ms": r.total_time_ms(),
                "total_draws": r.total_draws(),
                "throughput": r.throughput(),
                "runs": r.runs,
            })
        })
        .collect();
    serde_json::to_string_pretty(&values)
}
