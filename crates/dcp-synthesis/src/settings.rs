//! Per-call generation settings

use dcp_textgen::GenerationOptions;
use serde::{Deserialize, Serialize};

/// System message used when none is configured
pub const DEFAULT_SYSTEM_MESSAGE: &str =
    "You are a data governance specialist who writes clear, professional policy documents.";

/// Temperatures and token budgets for each call site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Model override for every call
    pub model: Option<String>,
    /// System message for every call
    pub system_message: Option<String>,
    /// Temperature of the free-text narrative calls
    pub narrative_temperature: f64,
    /// Token budget of the purpose call
    pub purpose_max_tokens: u32,
    /// Token budget of the scope call
    pub scope_max_tokens: u32,
    /// Token budget of the roles & responsibilities call
    pub roles_max_tokens: u32,
    /// Temperature of the structured reference-table call
    pub reference_temperature: f64,
    /// Token budget of the reference-table call
    pub reference_max_tokens: u32,
}

impl GenerationSettings {
    /// Create default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With model override
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn options(&self, temperature: f64, max_tokens: u32) -> GenerationOptions {
        let mut options = GenerationOptions::new(temperature, max_tokens);
        options.model.clone_from(&self.model);
        options.system_message.clone_from(&self.system_message);
        options
    }

    /// Options for a narrative call with the given budget
    #[must_use]
    pub fn narrative_options(&self, max_tokens: u32) -> GenerationOptions {
        self.options(self.narrative_temperature, max_tokens)
    }

    /// Options for the reference-table call
    #[must_use]
    pub fn reference_options(&self) -> GenerationOptions {
        self.options(self.reference_temperature, self.reference_max_tokens)
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: None,
            system_message: Some(DEFAULT_SYSTEM_MESSAGE.to_string()),
            narrative_temperature: 0.7,
            purpose_max_tokens: 150,
            scope_max_tokens: 200,
            roles_max_tokens: 300,
            reference_temperature: 0.3,
            reference_max_tokens: 1000,
        }
    }
}
