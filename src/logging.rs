// src/logging.rs
use crate::config::{LoggingConfig, LoggingStyle};
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initializes the tracing and logging system.
///
/// `RUST_LOG` still applies; the configured default level is only used for
/// targets it does not mention. Fails if a global subscriber is already set.
pub fn initialize(config: &LoggingConfig) -> Result<()> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(config.level_filter()?.into())
        .from_env_lossy();

    for directive in config.parsed_directives()? {
        filter = filter.add_directive(directive);
    }

    let formatter = tracing_subscriber::fmt()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(config.ansi)
        .with_env_filter(filter);

    match config.style {
        LoggingStyle::Compact => formatter.compact().try_init(),
        LoggingStyle::Json => formatter.json().try_init(),
    }
    .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
