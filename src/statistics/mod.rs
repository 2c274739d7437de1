//! Statistical reduction of timing samples.
//!
//! - Floor-index quantiles on sorted samples
//! - Summary statistics (median, fenced mean/min/max, outlier count)

mod quantile;
mod summary;

pub use quantile::{median_sorted, quantile_sorted, sort_samples};
pub use summary::summarize;
