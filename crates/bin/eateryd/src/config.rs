//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `eatery.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Upload and static file settings.
    pub storage: StorageConfig,
    /// Cross-origin settings for the public website.
    pub cors: CorsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL prefix, e.g. `sqlite:` or `sqlite:/var/lib/eatery/`.
    pub url: String,
    /// Database name; the file is `<name>.db`.
    pub name: String,
}

/// Where uploads are written and static files are served from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub public_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `eatery.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("eatery.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides from `lookup`. When two variables set the same key,
    /// the later one in each pair wins.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("EATERY_HOST") {
            self.server.host = val;
        }
        for key in ["PORT", "EATERY_PORT"] {
            if let Some(port) = lookup(key).and_then(|val| val.parse().ok()) {
                self.server.port = port;
            }
        }
        for key in ["DATABASE_URL", "EATERY_DATABASE_URL"] {
            if let Some(val) = lookup(key) {
                self.database.url = val;
            }
        }
        for key in ["DB_NAME", "EATERY_DB_NAME"] {
            if let Some(val) = lookup(key) {
                self.database.name = val;
            }
        }
        if let Some(val) = lookup("EATERY_PUBLIC_DIR") {
            self.storage.public_dir = PathBuf::from(val);
        }
        if let Some(val) = lookup("EATERY_CORS_ORIGINS") {
            self.cors.allowed_origins = val
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        for key in ["EATERY_LOG", "RUST_LOG"] {
            if let Some(val) = lookup(key) {
                self.logging.filter = val;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url != MEMORY_DATABASE_URL && self.database.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> String {
        if self.database.url == MEMORY_DATABASE_URL {
            return self.database.url.clone();
        }
        format!("{}{}.db?mode=rwc", self.database.url, self.database.name)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:".to_string(),
            name: "eatery".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eateryd=info,eatery=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overridden(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8888);
        assert_eq!(config.database_url(), "sqlite:eatery.db?mode=rwc");
        assert_eq!(config.storage.public_dir, PathBuf::from("public"));
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8888);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:/srv/data/'
            name = 'bistro'

            [storage]
            public_dir = '/srv/www'

            [cors]
            allowed_origins = ['https://bistro.example', 'http://localhost:3000']

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database_url(), "sqlite:/srv/data/bistro.db?mode=rwc");
        assert_eq!(config.storage.public_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.name, "eatery");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8888);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_prefer_prefixed_variables() {
        let config = overridden(&[
            ("PORT", "7000"),
            ("EATERY_PORT", "7001"),
            ("DB_NAME", "plain"),
            ("EATERY_DB_NAME", "prefixed"),
        ]);
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.database.name, "prefixed");
    }

    #[test]
    fn should_fall_back_to_unprefixed_variables() {
        let config = overridden(&[
            ("PORT", "7000"),
            ("DATABASE_URL", "sqlite:/tmp/"),
            ("DB_NAME", "diner"),
        ]);
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.database_url(), "sqlite:/tmp/diner.db?mode=rwc");
    }

    #[test]
    fn should_ignore_unparsable_port() {
        let config = overridden(&[("EATERY_PORT", "eighty")]);
        assert_eq!(config.server.port, 8888);
    }

    #[test]
    fn should_split_cors_origins() {
        let config = overridden(&[("EATERY_CORS_ORIGINS", "https://a.example, ,https://b.example")]);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn should_let_rust_log_win() {
        let config = overridden(&[("EATERY_LOG", "warn"), ("RUST_LOG", "trace")]);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_use_memory_url_as_is() {
        let config = overridden(&[("EATERY_DATABASE_URL", "sqlite::memory:")]);
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_database_name() {
        let config = overridden(&[("EATERY_DB_NAME", " ")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }
}
