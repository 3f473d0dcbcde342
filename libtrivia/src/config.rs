//! Configuration management for trivia

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";
pub const DEFAULT_AMOUNT: u8 = 10;
pub const DEFAULT_QUESTION_TYPE: &str = "multiple";

/// Largest batch the provider hands out in one request
pub const MAX_AMOUNT: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub amount: u8,
    pub question_type: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            amount: DEFAULT_AMOUNT,
            question_type: DEFAULT_QUESTION_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub ttl_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { ttl_secs: 5 }
    }
}

impl NotificationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("provider.base_url".to_string()).into());
        }
        if self.provider.amount == 0 || self.provider.amount > MAX_AMOUNT {
            return Err(ConfigError::Invalid {
                field: "provider.amount".to_string(),
                reason: format!("must be between 1 and {}", MAX_AMOUNT),
            }
            .into());
        }
        if self.provider.question_type.trim().is_empty() {
            return Err(ConfigError::MissingField("provider.question_type".to_string()).into());
        }
        if self.notifications.ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "notifications.ttl_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Resolve the configuration file path (`$TRIVIA_CONFIG`, else the platform config dir)
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TRIVIA_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("trivia").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriviaError;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider.base_url, "https://opentdb.com");
        assert_eq!(config.provider.amount, 10);
        assert_eq!(config.provider.question_type, "multiple");
        assert_eq!(config.notifications.ttl(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_config(
            r#"
[provider]
base_url = "http://localhost:8080"
"#,
        );

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.amount, 10);
        assert_eq!(config.notifications.ttl_secs, 5);
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
[provider]
base_url = "https://trivia.example"
amount = 20
question_type = "boolean"

[notifications]
ttl_secs = 8
"#,
        );

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.provider.amount, 20);
        assert_eq!(config.provider.question_type, "boolean");
        assert_eq!(config.notifications.ttl(), Duration::from_secs(8));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_config("[provider\nbase_url = ");

        match Config::load_from_path(file.path()) {
            Err(TriviaError::Config(ConfigError::ParseError(_))) => {}
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_out_of_range_is_rejected() {
        let file = write_config("[provider]\namount = 51\n");

        match Config::load_from_path(file.path()) {
            Err(TriviaError::Config(ConfigError::Invalid { field, .. })) => {
                assert_eq!(field, "provider.amount");
            }
            other => panic!("Expected invalid amount, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let mut config = Config::default();
        config.notifications.ttl_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let mut config = Config::default();
        config.provider.base_url = "  ".to_string();

        match config.validate() {
            Err(TriviaError::Config(ConfigError::MissingField(field))) => {
                assert_eq!(field, "provider.base_url");
            }
            other => panic!("Expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        match Config::load_from_path(&path) {
            Err(TriviaError::Config(ConfigError::ReadError(_))) => {}
            other => panic!("Expected read error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var("TRIVIA_CONFIG", "/tmp/trivia-test/config.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("TRIVIA_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/trivia-test/config.toml"));
    }

    #[test]
    #[serial]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        std::env::set_var("TRIVIA_CONFIG", path.to_str().unwrap());
        let config = Config::load();
        std::env::remove_var("TRIVIA_CONFIG");

        assert_eq!(config.unwrap(), Config::default());
    }
}
