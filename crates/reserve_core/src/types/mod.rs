//! Simulation parameter and result types.

pub mod error;
pub mod params;
pub mod result;

pub use error::SimulationError;
pub use params::{SimulationParams, SimulationParamsBuilder, MAX_TRIALS};
pub use result::{PercentileTable, SimulationResult};
