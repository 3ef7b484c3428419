//! Validation errors raised at the step-record read boundary

use crate::record::StepNumber;

/// Why a persisted step record could not be accepted
#[derive(Debug, thiserror::Error)]
pub enum StepValidationError {
    /// Record carries a different step number than the slot it was read from
    #[error("step mismatch: expected step {expected}, record says {actual}")]
    StepMismatch {
        /// Slot the record was read for
        expected: u8,
        /// Step number stored in the record
        actual: u8,
    },

    /// Step number outside 1..=4
    #[error("unknown step number: {0}")]
    UnknownStep(u8),

    /// Record has no `data` object
    #[error("step {0} has no data")]
    MissingData(StepNumber),

    /// Payload does not match the step's schema
    #[error("step {step} payload is invalid: {source}")]
    InvalidPayload {
        /// Step whose payload failed
        step: StepNumber,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },
}

impl StepValidationError {
    /// Create invalid payload error
    pub fn invalid_payload(step: StepNumber, source: serde_json::Error) -> Self {
        Self::InvalidPayload { step, source }
    }

    /// Whether the record was simply empty rather than malformed
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingData(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_display() {
        let err = StepValidationError::StepMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "step mismatch: expected step 2, record says 3"
        );
    }

    #[test]
    fn missing_is_not_invalid() {
        assert!(StepValidationError::MissingData(StepNumber::Criteria).is_missing());
        assert!(!StepValidationError::UnknownStep(9).is_missing());
    }
}
