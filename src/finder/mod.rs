//! Search for `count` consecutive distinct characters.
//!
//! Draws characters from a [`CharSource`](crate::stream::CharSource) and
//! accumulates them in a window. A repeat resets the window to just the
//! repeated character. The result is the total number of draws, resets
//! included. Both strategies return identical counts for identical
//! streams; they differ only in membership cost.

mod adaptive;
mod array;
mod set;

pub use adaptive::{AdaptiveFinder, Strategy, StrategyPolicy, ThresholdPolicy};
pub use array::find_with_array;
pub use set::find_with_set;
