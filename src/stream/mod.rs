//! Character streams feeding the duplicate finder.
//!
//! - [`Alphabet`]: validated ordered symbol set
//! - [`StreamGenerator`]: deterministic ramp-then-cycle stream
//! - [`RandomRampGenerator`]: seeded ramp with random segment lengths
//! - [`CharSource`] and adapters ([`from_fn`], [`ReplaySource`])

mod alphabet;
mod generator;
mod random;
mod source;

pub use alphabet::Alphabet;
pub use generator::StreamGenerator;
pub use random::RandomRampGenerator;
pub use source::{from_fn, CharSource, FromFn, ReplaySource};
