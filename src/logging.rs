// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `COMM_LINES_LOG=debug`.
pub const LOG_ENV: &str = "COMM_LINES_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Logs always go to stderr; stdout carries
/// only comparison records.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
