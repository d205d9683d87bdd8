//! Tracing setup: structured logging initialisation and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::defaults::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `LOTTO_LOG` environment variable for filtering, falling back
/// to `info`. Idempotent; a subscriber already installed by the host
/// application is left in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOTTO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}
