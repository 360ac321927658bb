//! Configuration service implementation.
//!
//! Loads the client configuration from `~/.config/legisbot/config.toml`,
//! writing a default file on first run so users have something to edit.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::RwLock;

use legisbot_core::config::ClientConfig;

use crate::paths::LegisPaths;

/// Errors that can occur during config storage operations.
#[derive(Debug)]
pub enum ConfigError {
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML parsing error.
    TomlParseError(toml::de::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::TomlParseError(e) => write!(f, "TOML parse error: {}", e),
            ConfigError::TomlSerError(e) => write!(f, "TOML serialization error: {}", e),
            ConfigError::ConfigDirNotFound => write!(f, "Could not determine config directory"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::TomlParseError(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::TomlSerError(e)
    }
}

/// Configuration service that loads and caches the client configuration.
#[derive(Debug)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: RwLock<Option<ClientConfig>>,
}

impl ConfigService {
    /// Creates a ConfigService with the default path
    /// (`~/.config/legisbot/config.toml`).
    pub fn new() -> Result<Self, ConfigError> {
        let path = LegisPaths::config_file().map_err(|_| ConfigError::ConfigDirNotFound)?;
        Ok(Self::with_path(path))
    }

    /// Creates a ConfigService with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: RwLock::new(None),
        }
    }

    /// Gets the client configuration, loading from file if not cached.
    ///
    /// A missing file is created with defaults; an unreadable file falls
    /// back to defaults.
    pub fn get_config(&self) -> ClientConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_default();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<ClientConfig, ConfigError> {
        if !self.path.exists() {
            let default_config = ClientConfig::default();
            self.save_config(&default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn save_config(&self, config: &ClientConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(config)?;

        // Atomic write: tmp file + rename
        let tmp_path = self.path.with_extension("toml.tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
