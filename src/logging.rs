//! Logging setup
//!
//! Installs a `tracing` fmt subscriber on stderr. `RUST_LOG` wins when set;
//! otherwise the filter follows the `--verbose` flag.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Initialize logging for this process
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the log filter for a config
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
