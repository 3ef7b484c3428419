//! Backend that never generates anything

use crate::error::TextGenError;
use crate::generator::{GenerationOptions, TextGenerator};
use async_trait::async_trait;

/// Always fails with [`TextGenError::Disabled`]
///
/// Used for offline runs: the pipeline then produces its static fallback
/// text for every generated section.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTextGenerator;

#[async_trait]
impl TextGenerator for DisabledTextGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, TextGenError> {
        Err(TextGenError::Disabled)
    }
}
