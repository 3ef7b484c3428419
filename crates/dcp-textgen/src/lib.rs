//! DCP Text Generation
//!
//! The policy pipeline asks an external service for short pieces of text.
//! This crate defines that seam and its backends:
//! - [`TextGenerator`]: the one operation the pipeline depends on
//! - [`HttpTextGenerator`]: OpenAI-compatible chat completions over `reqwest`
//! - [`DisabledTextGenerator`]: always fails, forcing every fallback
//! - [`request_text`]: call wrapper that treats empty output as failure and
//!   records the outcome
//!
//! Backends never panic; every failure is a [`TextGenError`] value.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod disabled;
pub mod error;
pub mod generator;
pub mod http;

pub use config::TextGenConfig;
pub use disabled::DisabledTextGenerator;
pub use error::TextGenError;
pub use generator::{request_text, GenerationOptions, TextGenerator};
pub use http::HttpTextGenerator;

#[cfg(any(test, feature = "mocks"))]
pub use generator::MockTextGenerator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
