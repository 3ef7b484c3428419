//! The text generation seam

use crate::error::TextGenError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Per-call generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model override; the backend default is used when `None`
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: f64,
    /// Output budget in tokens
    pub max_tokens: u32,
    /// System message override
    pub system_message: Option<String>,
}

impl GenerationOptions {
    /// Create options with the given temperature and token budget
    #[inline]
    #[must_use]
    pub fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            model: None,
            temperature,
            max_tokens,
            system_message: None,
        }
    }

    /// With model override
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// With system message
    #[inline]
    #[must_use]
    pub fn with_system_message(mut self, message: impl Into<String>) -> Self {
        self.system_message = Some(message.into());
        self
    }
}

/// External text generation capability
///
/// Implementations must not panic; transport problems, non-success
/// responses and timeouts are all reported as [`TextGenError`].
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, TextGenError>;
}

/// Issue one generation call and normalize its outcome
///
/// Whitespace-only output is reported as [`TextGenError::EmptyResponse`], so
/// callers can treat "no text" and "failed" identically.
pub async fn request_text<G>(
    generator: &G,
    prompt: &str,
    options: &GenerationOptions,
) -> Result<String, TextGenError>
where
    G: TextGenerator + ?Sized,
{
    let outcome = match generator.generate(prompt, options).await {
        Ok(text) if text.trim().is_empty() => Err(TextGenError::EmptyResponse),
        Ok(text) => Ok(text.trim().to_string()),
        Err(err) => Err(err),
    };

    match &outcome {
        Ok(_) => {
            metrics::counter!("dcp_textgen_requests_total", "outcome" => "success").increment(1);
        }
        Err(err) => {
            metrics::counter!("dcp_textgen_requests_total", "outcome" => err.kind()).increment(1);
            tracing::debug!(error = %err, max_tokens = options.max_tokens, "text generation failed");
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn request_text_trims_output() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .returning(|_, _| Ok("  A sentence.\n".to_string()));

        let text = request_text(&mock, "p", &GenerationOptions::new(0.7, 150))
            .await
            .unwrap();
        assert_eq!(text, "A sentence.");
    }

    #[tokio::test]
    async fn request_text_rejects_blank_output() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().returning(|_, _| Ok("   ".to_string()));

        let err = request_text(&mock, "p", &GenerationOptions::new(0.7, 150))
            .await
            .unwrap_err();
        assert!(matches!(err, TextGenError::EmptyResponse));
    }

    #[tokio::test]
    async fn request_text_passes_options_through() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt, options| {
                prompt == "describe"
                    && options.max_tokens == 300
                    && options.model.as_deref() == Some("small")
            })
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let options = GenerationOptions::new(0.3, 300).with_model("small");
        assert_eq!(request_text(&mock, "describe", &options).await.unwrap(), "ok");
    }
}
