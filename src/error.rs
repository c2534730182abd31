//! Error types for quantumforge

use thiserror::Error;

/// Main error type for quantumforge operations
#[derive(Error, Debug)]
pub enum Error {
    /// Command-line parsing failed (unknown flag, bad value, `--help`, ...)
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// The application's run failed; the message is surfaced verbatim
    #[error("{0}")]
    Run(String),
}

impl Error {
    /// Build a run failure from any displayable message
    pub fn run(msg: impl Into<String>) -> Self {
        Error::Run(msg.into())
    }

    /// Process exit status for this error
    ///
    /// Usage errors keep the parser's own code (2 for bad input, 0 for
    /// `--help`/`--version`). Run failures are fatal with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(e) => e.exit_code(),
            Error::Run(_) => 1,
        }
    }
}

/// Result type alias for quantumforge operations
pub type Result<T> = std::result::Result<T, Error>;
