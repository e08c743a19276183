//! Configuration handling for Lectern.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Index configuration
    #[serde(default)]
    pub index: IndexConfig,

    /// Query configuration
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Index-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Chunk window size (characters)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    800
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

/// Query-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Default result limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_limit() -> usize {
    10
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the default config path.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path (or defaults if `None`).
    pub fn load_from(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Path of the config file, if a config directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// A commented sample configuration file.
    pub fn sample_toml() -> &'static str {
        r#"# Lectern configuration

[index]
# Chunk window size in characters
chunk_size = 800

[query]
# Default number of results
default_limit = 10

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    }
}

/// Get the XDG data directory for Lectern.
pub fn data_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LECTERN_DATA_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "lectern").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the XDG config directory for Lectern.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LECTERN_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "lectern").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.index.chunk_size, 800);
        assert_eq!(config.query.default_limit, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.index.chunk_size, 800);
    }

    #[test]
    fn test_load_from_partial_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[index]\nchunk_size = 400\n").unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.index.chunk_size, 400);
        // Unspecified sections keep defaults
        assert_eq!(config.query.default_limit, 10);
    }

    #[test]
    fn test_load_from_malformed_file_is_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "chunk_size = [broken").unwrap();

        assert!(Config::load_from(Some(path)).is_err());
    }

    #[test]
    fn test_sample_toml_parses() {
        let config: Config = toml::from_str(Config::sample_toml()).unwrap();
        assert_eq!(config.index.chunk_size, 800);
    }
}
