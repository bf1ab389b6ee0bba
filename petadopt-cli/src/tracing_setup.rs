//! Tracing setup for the petadopt CLI
//!
//! Usage:
//!   petadopt --debug serve              # Debug logging to console
//!   RUST_LOG=petadopt_server=debug ...  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                            # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets the default filter to debug if RUST_LOG is unset)
    pub debug: bool,
}

impl TracingConfig {
    fn default_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info,tower_http=info"
        }
    }
}

/// Initialize tracing with console output
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_switches_default_filter() {
        assert_eq!(TracingConfig { debug: true }.default_filter(), "debug");
        let filter = TracingConfig::default().default_filter();
        assert!(filter.starts_with("info"));
        // Request spans and responses from TraceLayer are logged at info
        assert!(filter.contains("tower_http=info"));
    }
}
