//! Random number generation for the loss simulator.

mod prng;

pub use prng::ReserveRng;
