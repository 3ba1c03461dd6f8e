//! The loss simulator: trial loop and statistics assembly.
//!
//! One call to [`simulate`] runs `num_simulations` independent monthly
//! trials. Each trial draws a noisy event count, sums that many per-event
//! loss draws, and contributes one total to the empirical distribution. The
//! sorted distribution and its summary statistics come back as a
//! [`SimulationResult`].

use reserve_core::types::{SimulationError, SimulationParams, SimulationResult};

use crate::rng::ReserveRng;

/// Runs one Monte Carlo simulation of monthly fraud losses.
///
/// Per trial:
/// 1. `num_events = round(max(0, normal(avg_events, 0.2 * avg_events)))` —
///    the event count is itself noisy, clamped to non-negative before
///    rounding to an integer.
/// 2. `num_events` per-event losses are drawn from
///    `normal(avg_loss, avg_loss * volatility / 100)`; negative draws are
///    floored to zero (not discarded or resampled) and summed.
///
/// The run is synchronous and atomic: parameters are validated before any
/// entropy is consumed, and the call either returns a complete result or an
/// error with no draws taken. Concurrent callers each bring their own
/// `ReserveRng`; there is no shared accumulator.
///
/// # Errors
///
/// Returns [`SimulationError`] if the parameters fail
/// [`SimulationParams::validate`] (zero trial count, negative or non-finite
/// rates).
///
/// # Examples
///
/// ```rust
/// use reserve_core::types::SimulationParams;
/// use reserve_engine::{simulate, ReserveRng};
///
/// let params = SimulationParams::builder()
///     .num_simulations(2_000)
///     .avg_events(150.0)
///     .avg_loss(350.0)
///     .volatility(40.0)
///     .build()
///     .unwrap();
///
/// let result = simulate(&params, &mut ReserveRng::from_seed(42)).unwrap();
///
/// assert_eq!(result.monthly_losses().len(), 2_000);
/// assert_eq!(result.reserve_at(50), Some(result.median()));
/// ```
pub fn simulate(
    params: &SimulationParams,
    rng: &mut ReserveRng,
) -> Result<SimulationResult, SimulationError> {
    params.validate()?;

    let loss_std_dev = params.loss_std_dev();
    let event_std_dev = params.event_std_dev();

    let mut monthly_losses = Vec::with_capacity(params.num_simulations());
    for _ in 0..params.num_simulations() {
        let num_events = rng
            .gen_normal(params.avg_events(), event_std_dev)
            .max(0.0)
            .round() as u64;

        let mut total_loss = 0.0;
        for _ in 0..num_events {
            total_loss += rng.gen_normal(params.avg_loss(), loss_std_dev).max(0.0);
        }
        monthly_losses.push(total_loss);
    }

    // All values are finite and non-negative, so total_cmp is a plain
    // numeric order here.
    monthly_losses.sort_unstable_by(f64::total_cmp);

    Ok(SimulationResult::from_sorted_losses(monthly_losses))
}
