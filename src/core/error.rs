//! Observation errors.

use thiserror::Error;

/// Errors raised when recording an observation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObservationError {
    /// The value is not one of `stone`, `scissor`, `paper`
    #[error("invalid choice '{value}', must be one of stone|scissor|paper")]
    InvalidObservation { value: String },
}
