//! Logging subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Everything goes to stderr so that stdout carries only the greeting and
/// session output.
pub fn init() {
    fmt()
        .compact()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
