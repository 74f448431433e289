//! Assist client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for both analysis and reply drafting.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable the API key is read from by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for the assist client.
///
/// Credential presence is an environment-level precondition, not a hard
/// requirement: `api_key: None` is a valid configuration in which every
/// operation resolves to its documented fallback without attempting I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistConfig {
    /// API key, if one is configured.
    pub api_key: Option<String>,

    /// Base URL for the API.
    pub base_url: String,

    /// Model name/identifier.
    pub model: String,

    /// Request timeout duration.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

impl AssistConfig {
    /// Create a configuration with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read the API key from [`DEFAULT_API_KEY_ENV`]. Never fails: a
    /// missing or empty variable yields a keyless configuration.
    pub fn from_env() -> Self {
        Self::from_env_var(DEFAULT_API_KEY_ENV)
    }

    /// Read the API key from a specific environment variable.
    pub fn from_env_var(env_var: &str) -> Self {
        let api_key = std::env::var(env_var).ok().filter(|k| !k.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}
