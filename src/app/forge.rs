//! Default application wired into the `quantumforge` binary

use crate::app::Application;
use crate::config::defaults::APP_NAME;
use crate::config::Config;
use crate::error::Result;
use tracing::{debug, info, info_span};

/// The quantumforge application
#[derive(Debug)]
pub struct QuantumForge {
    config: Config,
}

impl QuantumForge {
    /// Create the application from resolved configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Application for QuantumForge {
    fn run(self) -> Result<()> {
        let span = info_span!("run", app = APP_NAME);
        let _guard = span.enter();

        info!("Starting {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
        debug!(config = ?self.config, "Resolved configuration");
        if self.config.verbose {
            debug!("Verbose logging enabled");
        }

        info!("Run complete");
        Ok(())
    }
}
