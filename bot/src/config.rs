//! Bot configuration (TOML)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Command prefix cannot be empty")]
    EmptyPrefix,
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix that marks a chat message as a command
    pub prefix: String,

    /// Name replies address the local user by (stdin transport)
    pub user: String,

    pub pokedex_path: PathBuf,
    pub stats_path: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "/".to_string(),
            user: "trainer".to_string(),
            pokedex_path: PathBuf::from("data/pokedex.json"),
            stats_path: PathBuf::from("data/stats.json"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            prefix = "!"
            stats_path = "/srv/stats/2019-01.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.prefix, "!");
        assert_eq!(config.stats_path, PathBuf::from("/srv/stats/2019-01.json"));
        assert_eq!(config.pokedex_path, Config::default().pokedex_path);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = Config::from_toml_str(r#"prefix = """#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPrefix));
    }

    #[test]
    fn test_malformed_config() {
        let err = Config::from_toml_str("prefix = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/dexbot.toml").unwrap_err();
        assert!(err.is_not_found());
    }
}
