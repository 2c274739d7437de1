//! Order statistics on sorted samples.
//!
//! Quantiles are read at floor indices rather than interpolated: the
//! `num/den` quantile of `n` sorted samples is `sorted[floor(n * num / den)]`.
//! This keeps every reported quantile an actually observed sample.

/// Read the `num/den` quantile of ascending-sorted data.
///
/// # Panics
///
/// Panics if `sorted` is empty or if `num > den` or `den == 0`.
pub fn quantile_sorted(sorted: &[f64], num: usize, den: usize) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(den > 0 && num <= den, "Quantile fraction must be in [0, 1]");

    let idx = (sorted.len() * num / den).min(sorted.len() - 1);
    sorted[idx]
}

/// Median of ascending-sorted data (upper median for even lengths).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    quantile_sorted(sorted, 1, 2)
}

/// Sort samples ascending using a total order (NaN sorts last).
pub fn sort_samples(samples: &mut [f64]) {
    samples.sort_by(|a, b| a.total_cmp(b));
}
