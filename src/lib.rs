//! quantumforge: command-line runner
//!
//! The binary parses its flags into a [`Config`], builds an [`Application`]
//! from it, runs it once, and turns a failed run into a fatal exit.
//!
//! ## Quick Start
//!
//! ```rust
//! use quantumforge::{Application, Config, QuantumForge};
//!
//! let app = QuantumForge::new(Config::new(false));
//! app.run().unwrap();
//! ```
//!
//! Tests and embedders can drive the same lifecycle with their own
//! application through [`cli::run_from`].

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use app::{Application, QuantumForge};
pub use config::Config;
pub use error::{Error, Result};
