//! CLI error types.

use thiserror::Error;

use reserve_core::types::SimulationError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag or flag combination was invalid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The simulation rejected its parameters
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// JSON output failed to serialise
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
