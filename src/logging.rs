//! Tracing initialization shared by the binaries.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Install a compact stderr subscriber.
///
/// - Uses `RUST_LOG` when it is set
/// - Otherwise logs at DEBUG if `verbose`, INFO if not
///
/// Stdout is left untouched for benchmark reports.
pub fn init_tracing(verbose: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .try_init()
}
