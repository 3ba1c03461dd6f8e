//! # reserve_server: REST API for the Reserve Dashboard
//!
//! Serves the browser dashboard:
//!
//! - `POST /api/v1/simulate` - run one Monte Carlo batch
//! - `GET /api/v1/presets` - scenario presets for the picker
//! - `GET /health`, `GET /ready` - probes
//!
//! Each request builds its own [`ReserveRng`](reserve_engine::ReserveRng)
//! (seeded or entropy-backed); no simulation state is shared between
//! requests.

pub mod config;
pub mod routes;
pub mod server;

/// Server version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
