//! # reserve_engine: Monte Carlo Loss Simulator (Layer 2)
//!
//! ## Layer 2 Role
//!
//! reserve_engine builds the empirical distribution of total monthly fraud
//! loss from a compound random process:
//!
//! - Seeded random variate generation ([`rng`])
//! - The trial loop and statistics assembly ([`simulate`](mod@simulate))
//!
//! # Architecture
//!
//! ```text
//! simulate(params, rng)
//! ├── SimulationParams   (validated inputs, reserve_core)
//! ├── ReserveRng         (uniform source + Box–Muller normals)
//! └── SimulationResult   (sorted sample + statistics, reserve_core)
//! ```
//!
//! The random source is an explicit argument rather than ambient global
//! state, so a fixed seed replays a run exactly.
//!
//! ## Usage Example
//!
//! ```rust
//! use reserve_core::types::SimulationParams;
//! use reserve_engine::{simulate, ReserveRng};
//!
//! let params = SimulationParams::builder()
//!     .num_simulations(1_000)
//!     .avg_events(150.0)
//!     .avg_loss(350.0)
//!     .volatility(40.0)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = ReserveRng::from_seed(42);
//! let result = simulate(&params, &mut rng).unwrap();
//!
//! assert_eq!(result.monthly_losses().len(), 1_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rng;
pub mod simulate;

pub use rng::ReserveRng;
pub use simulate::simulate;
