//! Assessment bundles
//!
//! A bundle is one organization plus its raw step records, as exported from
//! the wizard:
//!
//! ```json
//! { "organization": { "name": "Acme Corp" },
//!   "steps": [ { "step": 3, "title": "...", "timestamp": "...", "data": { ... } } ] }
//! ```
//!
//! Records are loaded without validation; the policy service validates them
//! when it reads them back.

use anyhow::Context as _;
use dcp_core::{InMemoryStepStore, OrgId, Organization, StoreError};
use dcp_model::RawStepRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Organization header of a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOrganization {
    /// Fixed ID; a fresh one is generated when absent
    #[serde(default)]
    pub id: Option<OrgId>,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// One organization with its step records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Organization
    pub organization: BundleOrganization,
    /// Step records in any order; a later record for the same step wins
    #[serde(default)]
    pub steps: Vec<RawStepRecord>,
}

impl Bundle {
    /// Read a bundle from a JSON file
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not a bundle.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read bundle {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse bundle {}", path.display()))
    }

    /// Load the bundle into a fresh in-memory store
    ///
    /// Records naming no valid step are skipped with a warning.
    ///
    /// # Errors
    /// Fails only if the store rejects the organization itself.
    pub fn into_store(self) -> anyhow::Result<(Arc<InMemoryStepStore>, Organization)> {
        let mut organization = Organization::new(self.organization.name);
        if let Some(id) = self.organization.id {
            organization = organization.with_id(id);
        }

        let store = Arc::new(InMemoryStepStore::new());
        store.register(organization.clone());
        for record in self.steps {
            let step = record.step;
            match store.put_record(organization.id, record) {
                Ok(()) => {}
                Err(err @ StoreError::Backend(_)) => {
                    tracing::warn!(step, error = %err, "bundle step record skipped");
                }
                Err(err) => return Err(err).context("failed to load bundle into store"),
            }
        }
        Ok((store, organization))
    }
}
