//! Log subscriber setup for the `bytewords` binary.
//!
//! `RUST_LOG` takes precedence; otherwise the level comes from the number
//! of `-v` flags. Logs go to stderr so encoded output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter level
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the console subscriber. Call once, before any events are emitted.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
