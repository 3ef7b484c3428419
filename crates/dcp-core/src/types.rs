//! Core types for DCP
//!
//! The organization is the aggregate root: it owns exactly one record per
//! assessment step.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique organization identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(pub Uuid);

impl OrgId {
    /// Generate new organization ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrgId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrgId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// An assessed organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Identifier
    pub id: OrgId,
    /// Display name, typed separately from the step-1 answers
    pub name: String,
}

impl Organization {
    /// Create organization with a fresh ID
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OrgId::new(),
            name: name.into(),
        }
    }

    /// With explicit ID
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: OrgId) -> Self {
        self.id = id;
        self
    }
}
