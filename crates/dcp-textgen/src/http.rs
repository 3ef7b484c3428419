//! OpenAI-compatible chat completions backend

use crate::config::TextGenConfig;
use crate::error::TextGenError;
use crate::generator::{GenerationOptions, TextGenerator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest error body kept in [`TextGenError::Status`]
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP backend
///
/// Holds one `reqwest::Client` for its whole lifetime. Construct it once at
/// startup and share it (behind an `Arc`) with every request handler.
#[derive(Debug, Clone)]
pub struct HttpTextGenerator {
    client: reqwest::Client,
    config: TextGenConfig,
    api_key: Option<String>,
}

impl HttpTextGenerator {
    /// Build a backend with its own client
    ///
    /// The API key is read from the environment variable named in `config`.
    ///
    /// # Errors
    /// - `TextGenError::Configuration` if the HTTP client cannot be built
    pub fn new(config: TextGenConfig) -> Result<Self, TextGenError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TextGenError::Configuration(e.to_string()))?;
        let api_key = config.api_key();
        if api_key.is_none() {
            tracing::warn!(
                env = %config.api_key_env,
                "no API key configured; requests are sent unauthenticated"
            );
        }
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build a backend around an existing client
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        config: TextGenConfig,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }

    /// Backend configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TextGenConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, TextGenError> {
        let model = options.model.as_deref().unwrap_or(&self.config.model);
        let system = options
            .system_message
            .as_deref()
            .or(self.config.system_message.as_deref());

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let body = ChatRequest {
            model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let mut request = self.client.post(self.config.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        tracing::debug!(model, max_tokens = options.max_tokens, "sending completion request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(TextGenError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(TextGenError::EmptyResponse)
    }
}
