//! Logging initialisation shared by the CLI and the HTTP service

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Result, ScanError};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so that
/// machine-readable command output on stdout stays clean.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            ScanError::Config(format!("invalid log level '{}': {}", config.level, e))
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "pretty" => builder.pretty().try_init(),
        _ => builder.compact().try_init(),
    };

    installed.map_err(|e| ScanError::Config(format!("failed to install subscriber: {}", e)))
}
