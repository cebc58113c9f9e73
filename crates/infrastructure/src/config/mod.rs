//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `WEATHERAPP_*` environment variables. Nested keys use a
//! double underscore, e.g. `WEATHERAPP_HTTP__TIMEOUT_SECS=5` or
//! `WEATHERAPP_RP5__BASE_URL=https://rp5.ua`.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use integration_rp5::Rp5Config;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::retry::RetryConfig;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "weatherapp";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WEATHERAPP";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page fetching
    #[serde(default)]
    pub http: HttpConfig,

    /// Location persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// RP5 provider settings
    #[serde(default)]
    pub rp5: Rp5Config,
}

/// HTTP client settings for page fetching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Retry policy for transient failures
    #[serde(default)]
    pub retry: RetryConfig,
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("weatherapp/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
            retry: RetryConfig::default(),
        }
    }
}

impl HttpConfig {
    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Where configured locations are kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// TOML file holding one table per provider
    #[serde(default = "default_locations_path")]
    pub locations_path: PathBuf,
}

fn default_locations_path() -> PathBuf {
    PathBuf::from("weatherapp_locations.toml")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            locations_path: default_locations_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// With `path` set, that file must exist. Without it, `weatherapp.toml`
    /// in the working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged values do
    /// not deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        debug!(
            locations_path = %app.storage.locations_path.display(),
            base_url = %app.rp5.base_url,
            "Configuration loaded"
        );
        Ok(app)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.http.timeout_secs == 0 {
            return Err("http.timeout_secs must be greater than 0".to_string());
        }
        if self.http.user_agent.trim().is_empty() {
            return Err("http.user_agent must not be empty".to_string());
        }
        if self.storage.locations_path.as_os_str().is_empty() {
            return Err("storage.locations_path must not be empty".to_string());
        }
        self.rp5.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.http.timeout(), Duration::from_secs(30));
        assert!(config.http.user_agent.starts_with("weatherapp/"));
        assert_eq!(
            config.storage.locations_path,
            PathBuf::from("weatherapp_locations.toml")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            timeout_secs = 5

            [rp5]
            default_location_name = "Львів"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert_eq!(config.http.retry.max_retries, 2);
        assert_eq!(config.rp5.default_location_name, "Львів");
        assert_eq!(config.rp5.base_url, "http://rp5.ua");
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[storage]\nlocations_path = \"/tmp/locs.toml\"\n[http.retry]\nmax_retries = 0"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.storage.locations_path, PathBuf::from("/tmp/locs.toml"));
        assert_eq!(config.http.retry.max_retries, 0);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/weatherapp.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut config = AppConfig::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().unwrap_err().contains("timeout_secs"));
    }

    #[test]
    fn invalid_rp5_section_is_reported() {
        let mut config = AppConfig::default();
        config.rp5.base_url = "ftp://rp5.ua".to_string();
        assert!(config.validate().is_err());
    }
}
