//! Configuration for jobscan-rs
//!
//! Loaded from a TOML file; every section falls back to its defaults so a
//! partial file only needs the keys it overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, ScanError};
use crate::scoring::ScoringConfig;

/// Environment variable naming a config file when no path is given explicitly
pub const CONFIG_ENV_VAR: &str = "JOBSCAN_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP service settings
    pub server: ServerConfig,
    /// Network verification settings
    pub probe: ProbeConfig,
    /// Persistence locations
    pub storage: StorageConfig,
    /// Scoring weights and thresholds
    pub scoring: ScoringConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1:8088")
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8088".to_string(),
        }
    }
}

/// Verification probe configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Timeout for a single name resolution, in milliseconds
    pub dns_timeout_ms: u64,
    /// Timeout for a single HEAD request, in milliseconds
    pub http_timeout_ms: u64,
    /// Overall budget for all verifications of one assessment, in milliseconds
    pub deadline_ms: u64,
    /// User agent sent with reachability probes
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            dns_timeout_ms: 4_000,
            http_timeout_ms: 6_000,
            deadline_ms: 20_000,
            user_agent: format!("Mozilla/5.0 jobscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ProbeConfig {
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding all persisted files
    pub data_dir: PathBuf,
    /// Assessment history file name
    pub history_file: String,
    /// Most recent assessment file name
    pub last_result_file: String,
    /// Scam report file name
    pub reports_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            history_file: "scan_history.json".to_string(),
            last_result_file: "last_result.json".to_string(),
            reports_file: "scam_reports.json".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }

    pub fn last_result_path(&self) -> PathBuf {
        self.data_dir.join(&self.last_result_file)
    }

    pub fn reports_path(&self) -> PathBuf {
        self.data_dir.join(&self.reports_file)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
    /// Output format: "pretty", "compact" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScanError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ScanError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from an explicit path, then `JOBSCAN_CONFIG`, then defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.scoring.normalizer == 0 {
            return Err(ScanError::Config(
                "scoring.normalizer must be greater than zero".to_string(),
            ));
        }
        if self.probe.dns_timeout_ms == 0 || self.probe.http_timeout_ms == 0 {
            return Err(ScanError::Config(
                "probe timeouts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.probe.dns_timeout(), Duration::from_secs(4));
        assert_eq!(config.probe.http_timeout(), Duration::from_secs(6));
        assert_eq!(config.scoring.normalizer, 200);
        assert_eq!(config.storage.history_path(), PathBuf::from("data/scan_history.json"));
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [probe]
            dns_timeout_ms = 1500

            [scoring.rules]
            payment = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.probe.dns_timeout_ms, 1500);
        assert_eq!(config.probe.http_timeout_ms, 6000);
        assert_eq!(config.scoring.rules.payment, 40);
        assert_eq!(config.scoring.rules.urgency, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_rejects_zero_normalizer() {
        let result = AppConfig::from_toml("[scoring]\nnormalizer = 0\n");
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::from_file("/nonexistent/jobscan.toml");
        assert!(matches!(result, Err(ScanError::Config(_))));
    }
}
