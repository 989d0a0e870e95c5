//! # Client configuration: `client.toml`
//!
//! Defines the TOML file the native shells read at startup (filename:
//! [`ClientConfig::filename`] = `"client.toml"`). The web shell uses
//! [`ClientConfig::default`] and talks to the page origin.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"   # omit to use the platform default
//!
//! [messages]
//! display_secs = 5                     # how long status messages stay visible
//!
//! [session]
//! verify_on_load = true                # check a restored session with the server
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub messages: MessageConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the activities API lives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute base URL. `None` means the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Status message configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_display_secs")]
    pub display_secs: u64,
}

fn default_display_secs() -> u64 {
    5
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_verify_on_load")]
    pub verify_on_load: bool,
}

fn default_verify_on_load() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            verify_on_load: default_verify_on_load(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at a specific API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = Some(base_url.into());
        self
    }

    /// How long a status message stays on screen.
    pub fn message_display(&self) -> Duration {
        Duration::from_secs(self.messages.display_secs)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.message_display(), Duration::from_secs(5));
        assert!(config.session.verify_on_load);
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://school.example:8000"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://school.example:8000")
        );
        assert_eq!(config.messages.display_secs, 5);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://localhost:8000");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = ClientConfig::from_toml("[messages]\ndisplay_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }
}
