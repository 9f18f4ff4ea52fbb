//! Configuration module for loading and parsing TOML configuration files.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite://users.db").
    pub url: String,
    /// Path to the schema script executed at startup.
    pub schema_path: PathBuf,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://users.db".to_string(),
            schema_path: PathBuf::from("sql/initialize.sql"),
            max_connections: 5,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `CONFIG_PATH` when set, otherwise defaults, then applies
    /// process environment overrides.
    ///
    /// # Errors
    /// Returns error if the file or an override is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `HOST`, `PORT`, `DATABASE_URL` and `SCHEMA_PATH` overrides
    /// looked up through `lookup`.
    ///
    /// # Errors
    /// Returns error if `PORT` is not a valid port number or the result
    /// fails validation.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| {
                ConfigError::InvalidValue(format!("PORT must be a valid number: {port}"))
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(path) = lookup("SCHEMA_PATH") {
            self.database.schema_path = PathBuf::from(path);
        }
        self.validate()?;
        Ok(self)
    }

    /// Returns the `host:port` address to bind to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "database url cannot be empty".to_string(),
            ));
        }
        if self.database.schema_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "database schema_path cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "database max_connections must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 3000

[database]
url = "sqlite://data/test.db"
schema_path = "schema/init.sql"
max_connections = 2
"#;

        let config = Config::parse(toml_content).expect("should parse");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite://data/test.db");
        assert_eq!(config.database.schema_path, PathBuf::from("schema/init.sql"));
        assert_eq!(config.database.max_connections, 2);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").expect("should parse");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.url, "sqlite://users.db");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").expect("should parse");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("[server\nport = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[database]\nurl = \"sqlite::memory:\"\n").unwrap();

        let config = Config::load(&path).expect("should load");
        assert_eq!(config.database.url, "sqlite::memory:");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/config.toml");
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_validation_zero_connections() {
        let result = Config::parse("[database]\nmax_connections = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_empty_url() {
        let mut config = Config::default();
        config.database.url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::default()
            .with_overrides(lookup_from(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "3000"),
                ("DATABASE_URL", "sqlite://other.db"),
                ("SCHEMA_PATH", "other.sql"),
            ]))
            .expect("overrides should apply");

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.database.url, "sqlite://other.db");
        assert_eq!(config.database.schema_path, PathBuf::from("other.sql"));
    }

    #[test]
    fn test_overrides_absent_keep_values() {
        let config = Config::default()
            .with_overrides(lookup_from(&[]))
            .expect("no overrides");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.schema_path, PathBuf::from("sql/initialize.sql"));
    }

    #[test]
    fn test_overrides_invalid_port() {
        let result = Config::default().with_overrides(lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
