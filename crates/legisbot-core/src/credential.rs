//! Credential storage trait.
//!
//! Defines the interface for the persisted bearer token. Absence of a
//! stored token means unauthenticated.
//!
//! # Security Note
//!
//! Implementations should ensure that:
//! - The credential file has appropriate permissions (e.g., 600 on Unix)
//! - Tokens are never logged or exposed in error messages

use crate::error::LegisError;

/// Durable client-local storage for the bearer token.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the persisted token, or `None` when no credential is stored.
    async fn load(&self) -> Result<Option<String>, LegisError>;

    /// Persists the token, replacing any previous one.
    async fn store(&self, token: &str) -> Result<(), LegisError>;

    /// Deletes the persisted token. Deleting an absent credential is not
    /// an error.
    async fn delete(&self) -> Result<(), LegisError>;
}
