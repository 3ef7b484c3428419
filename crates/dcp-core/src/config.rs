//! Service configuration
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration:
//!
//! ```toml
//! offline = false
//!
//! [textgen]
//! base_url = "https://api.openai.com/v1"
//! model = "gpt-4o-mini"
//! api_key_env = "DCP_API_KEY"
//! timeout_secs = 30
//!
//! [generation]
//! narrative_temperature = 0.7
//! reference_max_tokens = 1000
//! ```

use crate::error::ConfigError;
use dcp_synthesis::GenerationSettings;
use dcp_textgen::{DisabledTextGenerator, HttpTextGenerator, TextGenConfig, TextGenError, TextGenerator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// DCP configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DcpConfig {
    /// Skip the text generation service; every generated field falls back
    pub offline: bool,
    /// Text generation backend
    pub textgen: TextGenConfig,
    /// Per-call temperatures and budgets
    pub generation: GenerationSettings,
}

impl DcpConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With offline mode
    #[inline]
    #[must_use]
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// With text generation backend settings
    #[inline]
    #[must_use]
    pub fn with_textgen(mut self, textgen: TextGenConfig) -> Self {
        self.textgen = textgen;
        self
    }

    /// With generation settings
    #[inline]
    #[must_use]
    pub fn with_generation(mut self, generation: GenerationSettings) -> Self {
        self.generation = generation;
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for invalid TOML or mistyped fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`DcpConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), offline = config.offline, "configuration loaded");
        Ok(config)
    }

    /// Build the text generator this configuration selects
    ///
    /// # Errors
    /// Returns `TextGenError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn text_generator(&self) -> Result<Arc<dyn TextGenerator>, TextGenError> {
        if self.offline {
            tracing::info!("offline mode; generated text uses fallbacks");
            return Ok(Arc::new(DisabledTextGenerator));
        }
        Ok(Arc::new(HttpTextGenerator::new(self.textgen.clone())?))
    }
}
