//! Runtime configuration
//!
//! The resolved settings handed to the application at construction time.
//! The command line is the only source; there is no config file.

pub mod defaults;

use defaults::*;

/// Resolved configuration for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Enable verbose logging in the application
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: DEFAULT_VERBOSE,
        }
    }
}

impl Config {
    /// Create a config with the given verbosity
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Log filter directive matching this config's verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}
