//! DCP Model - typed assessment records and policy documents
//!
//! The four wizard steps are persisted as free-form JSON. This crate is the
//! read boundary that turns those blobs into strongly-typed payloads:
//! - [`RawStepRecord`]: the record exactly as the store holds it
//! - [`StepRecord`] / [`StepData`]: a validated, step-tagged payload
//! - [`StepInputs`]: the four (optional) payloads of one organization
//! - [`PolicyDocument`]: the synthesized policy, rebuilt on every request
//!
//! A payload that fails validation is reported as a [`StepValidationError`];
//! callers treat that the same as a missing step.
//!
//! # Example
//!
//! ```rust,ignore
//! use dcp_model::{RawStepRecord, StepInputs, StepNumber};
//!
//! let raw: RawStepRecord = serde_json::from_str(json)?;
//! let mut inputs = StepInputs::default();
//! inputs.accept(StepNumber::Inventory, raw)?;
//! assert!(inputs.step2.is_some());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod policy;
pub mod rating;
pub mod record;
pub mod steps;

pub use error::StepValidationError;
pub use policy::{
    ClassificationLevelRow, ClassificationReferenceRow, DataCategoryRow, NarrativeSections,
    PolicyDocument,
};
pub use rating::{Rating, YesNo};
pub use record::{RawStepRecord, StepData, StepInputs, StepNumber, StepRecord};
pub use steps::{
    CategoryEntry, ClassificationLevelsData, DataTypeDetail, EncryptionRequirement,
    GroupedDataType, Step1Data, Step2Data, Step3Data, Step4Data, DEFAULT_LEVEL_NAMES,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
