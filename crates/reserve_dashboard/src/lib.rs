//! # reserve_dashboard: Display Collaborators
//!
//! Pure helpers consumed by the service layer when turning a
//! [`SimulationResult`](reserve_core::types::SimulationResult) into what the
//! browser dashboard renders:
//!
//! - Histogram binning for the distribution chart ([`histogram`])
//! - Currency formatting for cards and axis labels ([`currency`])
//! - Named scenario presets for the preset picker ([`presets`])
//!
//! None of these carry simulation logic; they shape its inputs and outputs
//! for display.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod currency;
pub mod histogram;
pub mod presets;

pub use histogram::{Histogram, HistogramBin};
pub use presets::ScenarioPreset;
