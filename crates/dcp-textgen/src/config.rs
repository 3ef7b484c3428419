//! Backend configuration

use serde::{Deserialize, Serialize};

/// HTTP text generation backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextGenConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,
    /// Default model
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// System message sent when a call does not supply one
    pub system_message: Option<String>,
}

impl TextGenConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With default model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Chat completions endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Read the API key from the configured environment variable
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "DCP_API_KEY".to_string(),
            timeout_secs: 30,
            system_message: None,
        }
    }
}
