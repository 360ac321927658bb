//! Error types for the LegisBot client.

use thiserror::Error;

/// A shared error type for the entire LegisBot client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum LegisError {
    /// The server answered with a non-success status code.
    ///
    /// `message` carries the server-provided `detail`/`message` field when
    /// one could be extracted from the response body.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no detail"))]
    Api { status: u16, message: Option<String> },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// IO error (credential/config file operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LegisError {
    /// Creates an Api error from a status code and optional server message.
    pub fn api(status: u16, message: Option<String>) -> Self {
        Self::Api { status, message }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an Api error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// True for rejections that invalidate the session (expired or bad token).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == 401 || *status == 403)
    }

    /// The server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LegisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for LegisError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = LegisError::api(422, Some("Email ya registrado".to_string()));
        assert_eq!(err.to_string(), "API error (422): Email ya registrado");

        let err = LegisError::api(500, None);
        assert_eq!(err.to_string(), "API error (500): no detail");
    }

    #[test]
    fn test_auth_failure_detection() {
        assert!(LegisError::api(401, None).is_auth_failure());
        assert!(LegisError::api(403, None).is_auth_failure());
        assert!(!LegisError::api(404, None).is_auth_failure());
        assert!(!LegisError::network("connection refused").is_auth_failure());
    }

    #[test]
    fn test_server_message() {
        let err = LegisError::api(400, Some("detalle".to_string()));
        assert_eq!(err.server_message(), Some("detalle"));
        assert_eq!(LegisError::network("x").server_message(), None);
    }
}
