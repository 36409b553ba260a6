//! Configuration management for the AI call dashboard

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that overrides the backend base URL
pub const API_URL_ENV: &str = "CALLDASH_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard web server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Call backend configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Dashboard behavior
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Call backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend REST API, e.g. `http://localhost:3001/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Dashboard behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Seconds between background list refreshes
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

const fn default_poll_interval_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl DashboardConfig {
    /// Interval between background refreshes
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Config {
    /// Load configuration from `calldash.toml`, `CALLDASH_*` variables and `CALLDASH_API_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("calldash").required(false))
            .add_source(
                config::Environment::with_prefix("CALLDASH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("backend.base_url", std::env::var(API_URL_ENV).ok())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde defaults cannot guarantee
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending key.
    pub fn validate(&self) -> crate::Result<()> {
        let base_url = self.backend.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(crate::Error::configuration(format!(
                "backend.base_url must start with http:// or https://, got '{base_url}'"
            )));
        }

        if self.dashboard.poll_interval_secs == 0 {
            return Err(crate::Error::configuration(
                "dashboard.poll_interval_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}
