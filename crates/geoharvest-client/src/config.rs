use geoharvest_core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default backend base URL (the harvester webapp on its usual port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout in seconds.
///
/// Generous because the by-url source probe waits on a third-party host.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the REST clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: ConfigValue<String>,
    pub timeout_secs: ConfigValue<u64>,
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            base_url: ConfigValue::new(DEFAULT_BASE_URL.to_string(), ConfigSource::Default),
            timeout_secs: ConfigValue::new(DEFAULT_TIMEOUT_SECS, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| Error::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(base_url) = file_config.base_url {
            self.base_url.update(normalize_base_url(base_url), ConfigSource::File);
        }

        if let Some(timeout_secs) = file_config.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(base_url) = env::var("GEOHARVEST_BASE_URL") {
            self.base_url.update(normalize_base_url(base_url), ConfigSource::Environment);
        }

        if let Ok(timeout_str) = env::var("GEOHARVEST_TIMEOUT_SECS") {
            match timeout_str.parse::<u64>() {
                Ok(secs) => self.timeout_secs.update(secs, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOHARVEST_TIMEOUT_SECS value '{}': expected integer seconds",
                    timeout_str
                ),
            }
        }

        self
    }

    /// Per-request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.value)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// The clients interpolate paths after the base, so a trailing slash
/// would produce double-slash request paths.
pub(crate) fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::with_defaults();
        assert_eq!(config.base_url.value, DEFAULT_BASE_URL);
        assert_eq!(config.base_url.source, ConfigSource::Default);
        assert_eq!(config.timeout_secs.value, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // Lower precedence should not override
        value.update(400, ConfigSource::File);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
base_url = "https://harvester.example.edu/"
timeout_secs = 90
"#
        )
        .unwrap();

        let config = ClientConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.base_url.value, "https://harvester.example.edu");
        assert_eq!(config.base_url.source, ConfigSource::File);
        assert_eq!(config.timeout_secs.value, 90);
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();

        let result = ClientConfig::with_defaults().load_from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "http://from-file:8080""#).unwrap();

        env::set_var("GEOHARVEST_BASE_URL", "http://from-env:9090");
        let config = ClientConfig::with_defaults()
            .load_from_file(file.path())
            .unwrap()
            .load_from_env();
        env::remove_var("GEOHARVEST_BASE_URL");

        assert_eq!(config.base_url.value, "http://from-env:9090");
        assert_eq!(config.base_url.source, ConfigSource::Environment);
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_env_is_ignored() {
        env::set_var("GEOHARVEST_TIMEOUT_SECS", "soon");
        let config = ClientConfig::with_defaults().load_from_env();
        env::remove_var("GEOHARVEST_TIMEOUT_SECS");

        assert_eq!(config.timeout_secs.value, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.timeout_secs.source, ConfigSource::Default);
    }
}
