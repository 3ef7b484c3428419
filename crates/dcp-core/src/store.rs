//! Step record storage
//!
//! [`StepStore`] is the read interface the policy service depends on. It
//! returns raw records; payload validation happens in the service so that a
//! malformed record degrades to "no information" instead of an error.

use crate::error::StoreError;
use crate::types::{OrgId, Organization};
use async_trait::async_trait;
use dashmap::DashMap;
use dcp_model::{RawStepRecord, StepData, StepNumber};

/// Read access to organizations and their step records
#[async_trait]
pub trait StepStore: Send + Sync {
    /// Load an organization, `None` if it does not exist
    async fn organization(&self, id: OrgId) -> Result<Option<Organization>, StoreError>;

    /// Load the record for one step, `None` if it was never written
    async fn step_record(
        &self,
        id: OrgId,
        step: StepNumber,
    ) -> Result<Option<RawStepRecord>, StoreError>;
}

/// In-process store
///
/// Organizations and records live in concurrent maps; records are keyed by
/// organization and step, so each organization has at most one per step.
#[derive(Debug, Default)]
pub struct InMemoryStepStore {
    organizations: DashMap<OrgId, Organization>,
    records: DashMap<(OrgId, StepNumber), RawStepRecord>,
}

impl InMemoryStepStore {
    /// Create empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an organization together with four empty step records
    pub fn create_organization(&self, name: impl Into<String>) -> Organization {
        let organization = Organization::new(name);
        self.register(organization.clone());
        organization
    }

    /// Add an existing organization with four empty step records
    ///
    /// Any records already held for its ID are replaced.
    pub fn register(&self, organization: Organization) {
        let id = organization.id;
        for step in StepNumber::ALL {
            self.records.insert((id, step), RawStepRecord::empty(step));
        }
        tracing::debug!(org = %id, name = %organization.name, "organization created");
        self.organizations.insert(id, organization);
    }

    /// Overwrite the record of the step `data` belongs to
    ///
    /// # Errors
    /// - `UnknownOrganization` if `id` was never created
    /// - `Serialization` if the payload cannot be encoded
    pub fn submit_step(&self, id: OrgId, data: &StepData) -> Result<(), StoreError> {
        let record = RawStepRecord::submitted(data)?;
        self.put_record(id, record)
    }

    /// Store a raw record as-is, in the slot named by its `step` field
    ///
    /// Out-of-range step numbers are accepted here and rejected when read.
    ///
    /// # Errors
    /// - `UnknownOrganization` if `id` was never created
    /// - `Backend` if the record names no valid step
    pub fn put_record(&self, id: OrgId, record: RawStepRecord) -> Result<(), StoreError> {
        if !self.organizations.contains_key(&id) {
            return Err(StoreError::UnknownOrganization(id));
        }
        let step = StepNumber::from_u8(record.step)
            .ok_or_else(|| StoreError::Backend(format!("no slot for step {}", record.step)))?;
        tracing::debug!(org = %id, step = step.as_u8(), "step record written");
        self.records.insert((id, step), record);
        Ok(())
    }

    /// Number of organizations
    #[must_use]
    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    /// Whether the store holds no organizations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}

#[async_trait]
impl StepStore for InMemoryStepStore {
    async fn organization(&self, id: OrgId) -> Result<Option<Organization>, StoreError> {
        Ok(self.organizations.get(&id).map(|o| o.value().clone()))
    }

    async fn step_record(
        &self,
        id: OrgId,
        step: StepNumber,
    ) -> Result<Option<RawStepRecord>, StoreError> {
        Ok(self.records.get(&(id, step)).map(|r| r.value().clone()))
    }
}
