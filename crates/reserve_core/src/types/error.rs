//! Error types for the reserve simulation core.

use thiserror::Error;

/// Errors produced when validating or running a simulation.
///
/// These all occur before any random draw is consumed: a run either starts
/// with valid parameters and completes, or never starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Trial count outside the valid range [1, `MAX_TRIALS`].
    #[error("Invalid trial count {0}: must be in range [1, {max}]", max = crate::types::params::MAX_TRIALS)]
    InvalidTrialCount(usize),

    /// A named parameter failed validation.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },
}

impl SimulationError {
    /// Shorthand for an [`SimulationError::InvalidParameter`] with an owned reason.
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
