//! Interquartile-range outlier filtering.
//!
//! Hot samples are sorted once; the first and third quartiles are read at
//! the floor indices `n/4` and `3n/4`, and anything outside the Tukey fences
//! `[q1 - 1.5 iqr, q3 + 1.5 iqr]` is dropped. Fences are inclusive, so a
//! zero IQR keeps every sample equal to the quartiles.

use crate::constants::IQR_FENCE;
use crate::statistics::quantile_sorted;

/// Statistics about outlier filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierStats {
    /// Total samples before filtering.
    pub total_samples: usize,
    /// Samples remaining after filtering.
    pub retained_samples: usize,
    /// Number of outliers removed.
    pub outliers_removed: usize,
    /// Fraction of samples that were outliers (0.0 to 1.0).
    pub outlier_fraction: f64,
    /// First quartile.
    pub q1: f64,
    /// Third quartile.
    pub q3: f64,
    /// Lower fence (inclusive).
    pub lower_fence: f64,
    /// Upper fence (inclusive).
    pub upper_fence: f64,
}

impl OutlierStats {
    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Filter outliers from ascending-sorted samples.
///
/// # Returns
///
/// The retained samples (still ascending) and the filtering stats.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn filter_outliers(sorted: &[f64]) -> (Vec<f64>, OutlierStats) {
    assert!(!sorted.is_empty(), "Cannot filter outliers of empty samples");

    let total_samples = sorted.len();
    let q1 = quantile_sorted(sorted, 1, 4);
    let q3 = quantile_sorted(sorted, 3, 4);
    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_FENCE * iqr;
    let upper_fence = q3 + IQR_FENCE * iqr;

    let retained: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&t| t >= lower_fence && t <= upper_fence)
        .collect();

    let removed = total_samples - retained.len();
    let stats = OutlierStats {
        total_samples,
        retained_samples: retained.len(),
        outliers_removed: removed,
        outlier_fraction: removed as f64 / total_samples as f64,
        q1,
        q3,
        lower_fence,
        upper_fence,
    };

    (retained, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_outliers_removes_spike() {
        let mut samples: Vec<f64> = (0..99).map(|i| 1.0 + i as f64 * 0.001).collect();
        samples.push(1000.0);

        let (kept, stats) = filter_outliers(&samples);

        assert_eq!(stats.outliers_removed, 1);
        assert_eq!(kept.len(), 99);
        assert!(kept.iter().all(|&t| t < 2.0));
        assert!((stats.outlier_fraction - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_filter_outliers_low_tail() {
        // A suspiciously fast sample is an outlier too.
        let mut samples = vec![0.0];
        samples.extend(std::iter::repeat(10.0).take(3));
        samples.extend([10.5, 11.0, 11.5, 12.0]);

        let (kept, stats) = filter_outliers(&samples);

        assert_eq!(stats.outliers_removed, 1);
        assert_eq!(kept[0], 10.0);
    }

    #[test]
    fn test_zero_iqr_keeps_identical_samples() {
        let samples = vec![4.0; 20];
        let (kept, stats) = filter_outliers(&samples);

        assert_eq!(stats.iqr(), 0.0);
        assert_eq!(stats.lower_fence, 4.0);
        assert_eq!(stats.upper_fence, 4.0);
        assert_eq!(kept.len(), 20);
        assert_eq!(stats.outliers_removed, 0);
    }

    #[test]
    fn test_single_sample() {
        let (kept, stats) = filter_outliers(&[3.0]);
        assert_eq!(kept, vec![3.0]);
        assert_eq!(stats.q1, 3.0);
        assert_eq!(stats.q3, 3.0);
    }
}
