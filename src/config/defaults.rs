//! Default configuration values
//!
//! Named constants for the tunable parameters

/// Verbose logging is off unless requested
pub const DEFAULT_VERBOSE: bool = false;

/// Log filter used when not verbose and `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Application name (binary name, log target prefix)
pub const APP_NAME: &str = "quantumforge";
