//! Configuration schema for the desk client.
//!
//! The API key itself never appears in a config file; only the name of the
//! environment variable it is read from is configurable.

use assist::AssistConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main desk configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeskConfig {
    /// AI assist backend configuration
    #[serde(default)]
    pub assist: AssistSection,

    /// UI configuration
    #[serde(default)]
    pub ui: UiSection,
}

/// AI assist backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistSection {
    /// Model identifier
    pub model: String,

    /// API base URL
    pub base_url: String,

    /// Environment variable the API key is read from
    pub api_key_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AssistSection {
    fn default() -> Self {
        Self {
            model: assist::config::DEFAULT_MODEL.to_string(),
            base_url: assist::config::DEFAULT_BASE_URL.to_string(),
            api_key_env: assist::config::DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 60,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiSection {
    /// Event loop tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl DeskConfig {
    /// Overlay another config on top of this one. Sections present in the
    /// overlay replace their counterparts wholesale.
    pub fn merge(&mut self, other: DeskConfig) {
        self.assist = other.assist;
        self.ui = other.ui;
    }

    /// Build the assist client configuration, resolving the credential
    /// from the configured environment variable. Never fails: a missing
    /// key routes the client to its fallback mode.
    pub fn assist_config(&self) -> AssistConfig {
        AssistConfig::from_env_var(&self.assist.api_key_env)
            .with_base_url(self.assist.base_url.clone())
            .with_model(self.assist.model.clone())
            .with_timeout(Duration::from_secs(self.assist.timeout_secs))
    }
}
