//! Application seam
//!
//! The bootstrap only knows how to build an application from a [`Config`](crate::Config)
//! and run it once. Everything the tool actually does sits behind
//! [`Application`].

pub mod forge;

use crate::config::defaults::APP_NAME;
use crate::error::Result;

pub use forge::QuantumForge;

/// A unit of work constructed once and run once per process
pub trait Application {
    /// Name used in log events
    fn name(&self) -> &'static str {
        APP_NAME
    }

    /// Run to completion
    ///
    /// Consumes the application, so a second run is impossible. Any error
    /// returned is fatal to the process.
    fn run(self) -> Result<()>;
}
