//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Logs go to stderr so the report on stdout stays clean.
///
/// # Example
///
/// ```rust
/// use cookieget::{init_tracing, verbosity_filter};
///
/// init_tracing(&verbosity_filter(1));
/// ```
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Filter directive for a `-v` count: warnings only by default, then info,
/// debug and trace for this crate. Other crates stay at `warn`.
pub fn verbosity_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("cookieget={level},warn")
}
