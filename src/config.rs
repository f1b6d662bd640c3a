use crate::core::{EmsError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "EMS_CONFIG";
/// Environment variable overriding `database.path`.
pub const DATABASE_ENV: &str = "EMS_DATABASE";
/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "EMS_LOG_LEVEL";

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or ":memory:"
    pub path: String,
    /// Create missing tables when connecting
    pub init_schema: bool,
    /// How long SQLite waits on a locked database before failing
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: "employees.db".to_string(),
            init_schema: true,
            busy_timeout_ms: 5000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parses the configured level name.
    pub fn max_level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(self.level.trim()).map_err(|_| {
            EmsError::Config(format!("unknown log level '{}'", self.level))
        })
    }
}

impl Config {
    /// Loads the configuration for this process.
    ///
    /// Reads `$EMS_CONFIG` if set, otherwise the per-user config file if it
    /// exists, otherwise starts from defaults. Environment overrides are
    /// applied last.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = explicit.or_else(|| default_config_path().filter(|p| p.exists()));
        Config::from_sources(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds a configuration from an optional file and an environment lookup.
    pub fn from_sources<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = env(DATABASE_ENV).filter(|v| !v.trim().is_empty()) {
            self.database.path = path;
        }
        if let Some(level) = env(LOG_LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.logging.level = level;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.path.trim().is_empty() {
            return Err(EmsError::Config("database.path cannot be empty".to_string()));
        }
        self.logging.max_level()?;
        Ok(())
    }
}

/// Location of the per-user configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("employee-manager").join("config.toml"))
}

/// Loads configuration from a TOML file at the given path.
///
/// # Arguments
///
/// * `path` - The file path to the TOML configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        EmsError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    toml::from_str(&content)
        .map_err(|e| EmsError::Config(format!("failed to parse {}: {}", path.display(), e)))
}
