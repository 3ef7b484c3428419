//! DCP Core - data classification policy service
//!
//! Wires the pipeline together:
//! - Reads an organization and its four step records from a [`StepStore`]
//! - Validates each record at the read boundary
//! - Assembles the [`PolicyDocument`](dcp_model::PolicyDocument)
//! - Loads [`DcpConfig`] and selects the text generation backend
//!
//! # Example
//!
//! ```rust,ignore
//! use dcp_core::{DcpConfig, InMemoryStepStore, PolicyService};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DcpConfig::load("dcp.toml")?;
//! let store = Arc::new(InMemoryStepStore::new());
//! let org = store.create_organization("Acme Corp");
//!
//! let service = PolicyService::new(store, config.text_generator()?, config.generation);
//! let document = service.create_policy_data(org.id).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use config::DcpConfig;
pub use error::{ConfigError, PolicyError, StoreError};
pub use service::PolicyService;
pub use store::{InMemoryStepStore, StepStore};
pub use types::{OrgId, Organization};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with DCP Core
    pub use crate::{DcpConfig, InMemoryStepStore, OrgId, Organization, PolicyError, PolicyService, StepStore};
    pub use dcp_model::{PolicyDocument, StepData, StepNumber};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
