//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Default base URL of the LegisBot service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration loaded from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the LegisBot service (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// The base URL with any trailing slash removed.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig {
            base_url: "https://legisbot.example/".to_string(),
        };
        assert_eq!(config.base_url_trimmed(), "https://legisbot.example");
    }
}
