//! Human-readable and JSON renderings of results.

pub mod json;
pub mod terminal;

pub use json::{reports_to_json, to_json_pretty, NamedStatistics};
pub use terminal::{format_line, format_report, format_statistics};
