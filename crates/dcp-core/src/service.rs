//! Policy generation entry point
//!
//! Reads the organization and its four step records, validates each record
//! at the read boundary, and hands the surviving payloads to the assembler.
//! The service performs no writes.

use crate::error::PolicyError;
use crate::store::StepStore;
use crate::types::OrgId;
use dcp_model::{PolicyDocument, StepInputs, StepNumber};
use dcp_synthesis::{GenerationSettings, PolicyAssembler};
use dcp_textgen::TextGenerator;
use std::sync::Arc;

/// Generates policy documents for stored organizations
#[derive(Clone)]
pub struct PolicyService {
    store: Arc<dyn StepStore>,
    assembler: PolicyAssembler,
}

impl std::fmt::Debug for PolicyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyService")
            .field("assembler", &self.assembler)
            .finish_non_exhaustive()
    }
}

impl PolicyService {
    /// Create service over a store and a long-lived text generator
    #[must_use]
    pub fn new(
        store: Arc<dyn StepStore>,
        generator: Arc<dyn TextGenerator>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            store,
            assembler: PolicyAssembler::new(generator, settings),
        }
    }

    /// Read and validate all four step records
    ///
    /// A record that is missing, unreadable or malformed leaves its step
    /// absent; nothing here fails.
    pub async fn load_inputs(&self, id: OrgId) -> StepInputs {
        let reads = StepNumber::ALL.map(|step| async move {
            (step, self.store.step_record(id, step).await)
        });

        let mut inputs = StepInputs::new();
        for (step, result) in futures::future::join_all(reads).await {
            match result {
                Ok(Some(raw)) => {
                    if let Err(err) = inputs.accept(step, raw) {
                        tracing::warn!(org = %id, step = step.as_u8(), error = %err, "invalid step record ignored");
                    }
                }
                Ok(None) => {
                    tracing::debug!(org = %id, step = step.as_u8(), "step record missing");
                }
                Err(err) => {
                    tracing::warn!(org = %id, step = step.as_u8(), error = %err, "step record unreadable");
                }
            }
        }
        inputs
    }

    /// Generate the policy document for one organization
    ///
    /// # Errors
    /// - `OrganizationNotFound` if the organization does not exist
    /// - `Store` if the organization cannot be loaded
    pub async fn create_policy_data(&self, id: OrgId) -> Result<PolicyDocument, PolicyError> {
        let organization = self
            .store
            .organization(id)
            .await?
            .ok_or(PolicyError::OrganizationNotFound(id))?;
        tracing::info!(org = %id, name = %organization.name, "generating policy");

        let inputs = self.load_inputs(id).await;
        Ok(self
            .assembler
            .assemble(Some(&organization.name), &inputs)
            .await)
    }
}
