//! Unified path management for legisbot configuration files.
//!
//! All client files live under the platform config directory:
//!
//! ```text
//! ~/.config/legisbot/          # Config directory (XDG on Linux)
//! ├── config.toml              # Client configuration (service base URL)
//! └── token.json               # Persisted bearer token
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for legisbot.
pub struct LegisPaths;

impl LegisPaths {
    /// Returns the legisbot configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/legisbot/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("legisbot"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted credential file.
    ///
    /// # Security Note
    ///
    /// The token file is written with 600 permissions on Unix.
    pub fn token_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("token.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        let dir = LegisPaths::config_dir().unwrap();
        assert!(LegisPaths::config_file().unwrap().starts_with(&dir));
        assert!(LegisPaths::token_file().unwrap().starts_with(&dir));
        assert!(dir.ends_with("legisbot"));
    }
}
