//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, filtered by the `DOMARCH_LOG`
/// environment variable (`info` when unset). Later calls are no-ops, so
/// library consumers and tests can call this freely.
pub fn init() {
    let filter =
        EnvFilter::try_from_env("DOMARCH_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
