//! Error types for DCP core
//!
//! - [`StoreError`]: step store failures
//! - [`PolicyError`]: the only failures `create_policy_data` surfaces
//! - [`ConfigError`]: configuration loading

use crate::types::OrgId;
use std::path::PathBuf;

/// Step store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Organization does not exist
    #[error("unknown organization: {0}")]
    UnknownOrganization(OrgId),

    /// Step payload could not be serialized for storage
    #[error("failed to serialize step payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether retrying the same call may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}

/// Policy generation errors
///
/// Missing or malformed step data and text generation failures are never
/// errors; only the organization lookup can fail.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Organization does not exist
    #[error("organization not found: {0}")]
    OrganizationNotFound(OrgId),

    /// Organization could not be loaded
    #[error("failed to load organization: {0}")]
    Store(#[from] StoreError),
}

impl PolicyError {
    /// Whether the organization is missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PolicyError::OrganizationNotFound(_)
                | PolicyError::Store(StoreError::UnknownOrganization(_))
        )
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`DcpConfig`](crate::DcpConfig)
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
