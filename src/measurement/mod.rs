//! Measurement infrastructure for warm-up analysis.
//!
//! This module provides:
//! - An injectable [`Clock`] capability (real and scripted)
//! - A [`Timer`] that times closures against a clock
//! - Sample collection in cold / warm-up / hot phases
//! - IQR-based outlier filtering

mod collector;
mod outlier;
mod timer;

pub use collector::{Collector, Samples};
pub use outlier::{filter_outliers, OutlierStats};
pub use timer::{black_box, Clock, MonotonicClock, ScriptedClock, Timer};
