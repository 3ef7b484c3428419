//! Error types for text generation backends

/// Text generation failure
///
/// Callers in the policy pipeline never propagate these; every variant leads
/// to the same fallback.
#[derive(Debug, thiserror::Error)]
pub enum TextGenError {
    /// Request did not complete in time
    #[error("request timed out")]
    Timeout,

    /// Network or protocol failure
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Service answered with a non-success status
    #[error("service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        body: String,
    },

    /// Response body did not have the expected shape
    #[error("malformed response: {0}")]
    Decode(String),

    /// Service answered with no text
    #[error("empty response")]
    EmptyResponse,

    /// Backend is switched off
    #[error("text generation is disabled")]
    Disabled,

    /// Backend could not be constructed
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TextGenError {
    /// Check if the failure was a timeout
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Short label used as a metric value
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::EmptyResponse => "empty",
            Self::Disabled => "disabled",
            Self::Configuration(_) => "configuration",
        }
    }
}

impl From<reqwest::Error> for TextGenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}
