//! Application settings loading from config.toml and the environment.
//!
//! Resolution order for the database URL: the `DATABASE_URL` environment
//! variable wins, then the `[database] url` key of an optional `config.toml`,
//! then a local `SQLite` default. The config file is optional; a missing file
//! is not an error, a malformed one is.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Fallback database location when nothing is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/ruralflow.sqlite?mode=rwc";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection URL handed to the database layer
    pub database_url: String,
}

/// Structure of the config.toml file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    database: Option<DatabaseSection>,
}

/// `[database]` section of config.toml
#[derive(Debug, Deserialize)]
struct DatabaseSection {
    url: Option<String>,
}

fn parse_config_file(contents: &str) -> Result<ConfigFile> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from an explicit config file path plus the environment.
///
/// # Errors
/// Returns an error if an existing config file cannot be read or parsed.
pub fn load_configuration<P: AsRef<Path>>(config_path: P) -> Result<AppConfig> {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return Ok(AppConfig { database_url: url });
    }

    let path = config_path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read config file: {e}"),
        })?;
        let file = parse_config_file(&contents)?;
        if let Some(url) = file.database.and_then(|d| d.url) {
            return Ok(AppConfig { database_url: url });
        }
    }

    Ok(AppConfig {
        database_url: DEFAULT_DATABASE_URL.to_string(),
    })
}

/// Loads configuration from the default location (./config.toml).
///
/// # Errors
/// Returns an error if an existing config.toml cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    load_configuration("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_database_section() {
        let toml_str = r#"
            [database]
            url = "sqlite://tmp/test.sqlite"
        "#;

        let file = parse_config_file(toml_str).unwrap();
        assert_eq!(
            file.database.and_then(|d| d.url).as_deref(),
            Some("sqlite://tmp/test.sqlite")
        );
    }

    #[test]
    fn test_parse_empty_file_is_valid() {
        let file = parse_config_file("").unwrap();
        assert!(file.database.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = parse_config_file("[database\nurl = ").unwrap_err();
        assert!(matches!(err, Error::Config { message: _ }));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = load_configuration("does-not-exist.toml").unwrap();
        // Holds unless the test environment exports DATABASE_URL
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        }
    }
}
