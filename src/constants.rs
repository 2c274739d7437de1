//! Literal constants shared by the harness, the finder and the binaries.

/// Master alphabet the character streams draw from.
///
/// 79 unique symbols; the requested distinct count may not exceed its length.
pub const MASTER_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789$+[{(&=)}]*!|`%#\\";

/// Untimed warm-up calls before hot sampling.
pub const DEFAULT_WARMUP_ITERATIONS: usize = 1_000_000;

/// Timed hot samples per harness run.
pub const DEFAULT_MEASUREMENTS: usize = 100;

/// Tukey fence multiplier applied to the interquartile range.
pub const IQR_FENCE: f64 = 1.5;

/// Outlier fraction above which a harness run is reported as noisy.
pub const NOISY_OUTLIER_FRACTION: f64 = 0.1;

/// Distinct count at and above which the set strategy is selected.
pub const SIZE_THRESHOLD: usize = 50;

/// Default distinct count the finder searches for.
pub const DEFAULT_COUNT: usize = 10;

/// Number of draws served from the ramp before switching to the no-repeat cycle.
pub const DEFAULT_CHARS_UNTIL: u64 = 800_000;

/// Trials per finder in one benchmark report.
pub const DEFAULT_RUN_COUNT: usize = 40;
