//! Step records and the read-boundary validation
//!
//! [`RawStepRecord`] mirrors what the store persists: a step number, a title,
//! a timestamp and an untyped `data` blob. [`StepRecord::validate`] decodes
//! the blob into the [`StepData`] variant for that step. Anything that fails
//! here is reported as [`StepValidationError`] and treated by callers as "no
//! information" for the step.

use crate::error::StepValidationError;
use crate::steps::{Step1Data, Step2Data, Step3Data, Step4Data};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The four assessment steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StepNumber {
    /// Step 1: context & objectives
    Context,
    /// Step 2: data inventory
    Inventory,
    /// Step 3: classification criteria
    Criteria,
    /// Step 4: access & security controls
    Controls,
}

impl StepNumber {
    /// All steps in wizard order
    pub const ALL: [StepNumber; 4] = [
        StepNumber::Context,
        StepNumber::Inventory,
        StepNumber::Criteria,
        StepNumber::Controls,
    ];

    /// Numeric step (1..=4)
    #[inline]
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            StepNumber::Context => 1,
            StepNumber::Inventory => 2,
            StepNumber::Criteria => 3,
            StepNumber::Controls => 4,
        }
    }

    /// Parse numeric step
    #[inline]
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(StepNumber::Context),
            2 => Some(StepNumber::Inventory),
            3 => Some(StepNumber::Criteria),
            4 => Some(StepNumber::Controls),
            _ => None,
        }
    }

    /// Wizard title of the step
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            StepNumber::Context => "Context & Objectives",
            StepNumber::Inventory => "Data Inventory",
            StepNumber::Criteria => "Classification Criteria",
            StepNumber::Controls => "Access & Security Controls",
        }
    }
}

impl TryFrom<u8> for StepNumber {
    type Error = StepValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(StepValidationError::UnknownStep(value))
    }
}

impl From<StepNumber> for u8 {
    fn from(step: StepNumber) -> Self {
        step.as_u8()
    }
}

impl fmt::Display for StepNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Step record as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStepRecord {
    /// Declared step number
    pub step: u8,
    /// Step title
    #[serde(default)]
    pub title: String,
    /// ISO-8601 time of the last submit
    #[serde(default)]
    pub timestamp: String,
    /// Untyped payload
    #[serde(default)]
    pub data: Option<Value>,
}

impl RawStepRecord {
    /// Empty record written when an organization is created
    #[must_use]
    pub fn empty(step: StepNumber) -> Self {
        Self {
            step: step.as_u8(),
            title: step.title().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            data: Some(Value::Object(serde_json::Map::new())),
        }
    }

    /// Record holding a freshly submitted payload
    pub fn submitted(data: &StepData) -> Result<Self, serde_json::Error> {
        let step = data.step();
        Ok(Self {
            step: step.as_u8(),
            title: step.title().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            data: Some(data.to_value()?),
        })
    }
}

/// Decoded payload, tagged by step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepData {
    /// Step 1 payload
    Context(Step1Data),
    /// Step 2 payload
    Inventory(Step2Data),
    /// Step 3 payload
    Criteria(Step3Data),
    /// Step 4 payload
    Controls(Step4Data),
}

impl StepData {
    /// Decode a payload for the given step
    pub fn decode(step: StepNumber, value: Value) -> Result<Self, StepValidationError> {
        let wrap = |e| StepValidationError::invalid_payload(step, e);
        Ok(match step {
            StepNumber::Context => StepData::Context(serde_json::from_value(value).map_err(wrap)?),
            StepNumber::Inventory => {
                StepData::Inventory(serde_json::from_value(value).map_err(wrap)?)
            }
            StepNumber::Criteria => StepData::Criteria(serde_json::from_value(value).map_err(wrap)?),
            StepNumber::Controls => StepData::Controls(serde_json::from_value(value).map_err(wrap)?),
        })
    }

    /// Step this payload belongs to
    #[inline]
    #[must_use]
    pub fn step(&self) -> StepNumber {
        match self {
            StepData::Context(_) => StepNumber::Context,
            StepData::Inventory(_) => StepNumber::Inventory,
            StepData::Criteria(_) => StepNumber::Criteria,
            StepData::Controls(_) => StepNumber::Controls,
        }
    }

    /// Encode back to the persisted JSON shape
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            StepData::Context(d) => serde_json::to_value(d),
            StepData::Inventory(d) => serde_json::to_value(d),
            StepData::Criteria(d) => serde_json::to_value(d),
            StepData::Controls(d) => serde_json::to_value(d),
        }
    }
}

/// Validated step record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Step number
    pub step: StepNumber,
    /// Step title
    pub title: String,
    /// Last submit time, if the stored timestamp parses
    pub timestamp: Option<DateTime<Utc>>,
    /// Decoded payload
    pub data: StepData,
}

impl StepRecord {
    /// Validate a raw record read for slot `expected`
    ///
    /// # Errors
    /// - `UnknownStep` / `StepMismatch` if the record is in the wrong slot
    /// - `MissingData` if the record has no payload
    /// - `InvalidPayload` if the payload does not decode
    pub fn validate(raw: RawStepRecord, expected: StepNumber) -> Result<Self, StepValidationError> {
        let step = StepNumber::try_from(raw.step)?;
        if step != expected {
            return Err(StepValidationError::StepMismatch {
                expected: expected.as_u8(),
                actual: raw.step,
            });
        }

        let value = raw.data.ok_or(StepValidationError::MissingData(step))?;
        let data = StepData::decode(step, value)?;
        let timestamp = DateTime::parse_from_rfc3339(&raw.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc));

        Ok(Self {
            step,
            title: raw.title,
            timestamp,
            data,
        })
    }
}

/// The four step payloads of one organization, each possibly absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInputs {
    /// Step 1 payload
    pub step1: Option<Step1Data>,
    /// Step 2 payload
    pub step2: Option<Step2Data>,
    /// Step 3 payload
    pub step3: Option<Step3Data>,
    /// Step 4 payload
    pub step4: Option<Step4Data>,
}

impl StepInputs {
    /// Create inputs with every step absent
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a decoded payload in its slot
    pub fn insert(&mut self, data: StepData) {
        match data {
            StepData::Context(d) => self.step1 = Some(d),
            StepData::Inventory(d) => self.step2 = Some(d),
            StepData::Criteria(d) => self.step3 = Some(d),
            StepData::Controls(d) => self.step4 = Some(d),
        }
    }

    /// Validate and store a raw record read for slot `expected`
    ///
    /// On error the slot is left untouched (absent).
    pub fn accept(
        &mut self,
        expected: StepNumber,
        raw: RawStepRecord,
    ) -> Result<(), StepValidationError> {
        let record = StepRecord::validate(raw, expected)?;
        self.insert(record.data);
        Ok(())
    }

    /// With step 1 payload
    #[must_use]
    pub fn with_step1(mut self, data: Step1Data) -> Self {
        self.step1 = Some(data);
        self
    }

    /// With step 2 payload
    #[must_use]
    pub fn with_step2(mut self, data: Step2Data) -> Self {
        self.step2 = Some(data);
        self
    }

    /// With step 3 payload
    #[must_use]
    pub fn with_step3(mut self, data: Step3Data) -> Self {
        self.step3 = Some(data);
        self
    }

    /// With step 4 payload
    #[must_use]
    pub fn with_step4(mut self, data: Step4Data) -> Self {
        self.step4 = Some(data);
        self
    }

    /// Steps that carry a payload
    #[must_use]
    pub fn present_steps(&self) -> Vec<StepNumber> {
        let mut present = Vec::with_capacity(4);
        if self.step1.is_some() {
            present.push(StepNumber::Context);
        }
        if self.step2.is_some() {
            present.push(StepNumber::Inventory);
        }
        if self.step3.is_some() {
            present.push(StepNumber::Criteria);
        }
        if self.step4.is_some() {
            present.push(StepNumber::Controls);
        }
        present
    }
}
