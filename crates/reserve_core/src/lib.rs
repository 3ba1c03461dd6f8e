//! # reserve_core: Foundation for the Fraud-Loss Reserve Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! reserve_core serves as the bottom layer of the workspace, providing:
//! - Simulation parameter and result types (`types`)
//! - Error types: `SimulationError` (`types::error`)
//! - Descriptive statistics over a sorted loss sample (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other reserve_* crates, with minimal
//! external dependencies:
//! - thiserror: structured error types
//! - serde: serialisation of wire-facing result types
//!
//! The statistics kernels themselves are plain `f64` arithmetic.
//!
//! ## Usage Examples
//!
//! ```rust
//! use reserve_core::types::SimulationParams;
//! use reserve_core::stats;
//!
//! let params = SimulationParams::builder()
//!     .num_simulations(5_000)
//!     .avg_events(150.0)
//!     .avg_loss(350.0)
//!     .volatility(40.0)
//!     .build()
//!     .expect("valid parameters");
//!
//! assert_eq!(params.num_simulations(), 5_000);
//! assert!((params.loss_std_dev() - 140.0).abs() < 1e-12);
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(stats::mean(&sample), 2.5);
//! assert_eq!(stats::median_sorted(&sample), 3.0); // upper-middle element
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod stats;
pub mod types;

pub use types::error::SimulationError;
pub use types::params::{SimulationParams, SimulationParamsBuilder, MAX_TRIALS};
pub use types::result::{PercentileTable, SimulationResult};
