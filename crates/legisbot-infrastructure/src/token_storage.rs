//! Persisted credential file storage.
//!
//! Stores the bearer token as a single-field JSON file
//! (`~/.config/legisbot/token.json`). Absence of the file means
//! unauthenticated.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use legisbot_core::LegisError;
use legisbot_core::credential::CredentialStore;

use crate::paths::LegisPaths;

/// Errors that can occur during token storage operations.
#[derive(Debug)]
pub enum TokenStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for TokenStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            TokenStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            TokenStorageError::ConfigDirNotFound => {
                write!(f, "Could not determine config directory")
            }
        }
    }
}

impl std::error::Error for TokenStorageError {}

impl From<std::io::Error> for TokenStorageError {
    fn from(e: std::io::Error) -> Self {
        TokenStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for TokenStorageError {
    fn from(e: serde_json::Error) -> Self {
        TokenStorageError::ParseError(e)
    }
}

impl From<TokenStorageError> for LegisError {
    fn from(e: TokenStorageError) -> Self {
        match e {
            TokenStorageError::ParseError(inner) => LegisError::Serialization {
                format: "JSON".to_string(),
                message: inner.to_string(),
            },
            other => LegisError::io(other.to_string()),
        }
    }
}

/// On-disk shape of `token.json`.
#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    access_token: String,
}

/// Storage for the persisted bearer token (token.json).
///
/// Responsibilities:
/// - Load the token from the credential file
/// - Save a new token atomically (tmp file + rename)
/// - Delete the file on logout or token rejection
///
/// # Security Note
///
/// The file is plaintext JSON; on Unix it is created with 600 permissions.
/// The token value never appears in errors or logs.
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Creates a new TokenStorage with the default path
    /// (`~/.config/legisbot/token.json`).
    pub fn new() -> Result<Self, TokenStorageError> {
        let path = LegisPaths::token_file().map_err(|_| TokenStorageError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a new TokenStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))`: A credential is stored
    /// - `Ok(None)`: No credential file exists
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<String>, TokenStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let file: TokenFile = serde_json::from_str(&content)?;
        Ok(Some(file.access_token))
    }

    /// Saves the token atomically via a temporary file and rename.
    pub fn save(&self, token: &str) -> Result<(), TokenStorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&TokenFile {
            access_token: token.to_string(),
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp_file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is written to disk before the rename
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Deletes the credential file. Deleting an absent file succeeds.
    pub fn delete(&self) -> Result<(), TokenStorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the path to the credential file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait::async_trait]
impl CredentialStore for TokenStorage {
    async fn load(&self) -> Result<Option<String>, LegisError> {
        TokenStorage::load(self).map_err(Into::into)
    }

    async fn store(&self, token: &str) -> Result<(), LegisError> {
        TokenStorage::save(self, token).map_err(Into::into)
    }

    async fn delete(&self) -> Result<(), LegisError> {
        TokenStorage::delete(self).map_err(Into::into)
    }
}
