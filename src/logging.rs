//! Tracing subscriber setup for binaries and demos embedding recordbook.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "recordbook=info";

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `filter` is used, falling back to
/// `recordbook=info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(filter: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(DEFAULT_LOG_FILTER)));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
