//! Reduction of a completed sample run to [`Statistics`].

use tracing::{debug, warn};

use crate::constants::NOISY_OUTLIER_FRACTION;
use crate::measurement::filter_outliers;
use crate::result::Statistics;

use super::quantile::{median_sorted, sort_samples};

/// Reduce hot samples (milliseconds) and the cold sample to [`Statistics`].
///
/// The median is taken over all samples; average, min and max only over
/// the samples inside the IQR fences.
///
/// # Panics
///
/// Panics if `samples` is empty.
pub fn summarize(cold_time_ms: f64, mut samples: Vec<f64>) -> Statistics {
    assert!(!samples.is_empty(), "Cannot summarize empty samples");

    sort_samples(&mut samples);
    let median_ms = median_sorted(&samples);
    let (retained, outliers) = filter_outliers(&samples);

    // The median lies between the quartiles and therefore inside the fences,
    // so at least one sample is always retained.
    let average_ms = retained.iter().sum::<f64>() / retained.len() as f64;
    let min_ms = retained.first().copied().unwrap_or(median_ms);
    let max_ms = retained.last().copied().unwrap_or(median_ms);

    debug!(
        samples = samples.len(),
        q1 = outliers.q1,
        q3 = outliers.q3,
        outliers = outliers.outliers_removed,
        "summarized hot samples"
    );
    if outliers.outlier_fraction > NOISY_OUTLIER_FRACTION {
        warn!(
            fraction = outliers.outlier_fraction,
            "more than {:.0}% of hot samples were outliers; results may be noisy",
            NOISY_OUTLIER_FRACTION * 100.0
        );
    }

    Statistics {
        cold_time_ms,
        median_ms,
        average_ms,
        min_ms,
        max_ms,
        outlier_count: outliers.outliers_removed,
        sample_count: samples.len(),
    }
}
