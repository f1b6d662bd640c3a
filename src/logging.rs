//! Logging setup. Events go to stderr so they never mix with the prompts
//! written to stdout.

use crate::config::LoggingConfig;
use crate::core::{EmsError, Result};

/// Installs the global `tracing` subscriber at the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = config.max_level()?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| EmsError::Config(format!("unable to initialise logging: {}", e)))
}
