//! Simulation parameters and their builder.

use super::error::SimulationError;

/// Maximum number of independent trials allowed in one run.
pub const MAX_TRIALS: usize = 10_000_000;

/// Relative volatility of the per-trial event count.
///
/// The number of fraud events in a month is itself noisy; its standard
/// deviation is fixed at 20% of its mean.
pub const EVENT_COUNT_VOLATILITY: f64 = 0.2;

/// Parameters of one simulation run.
///
/// Immutable once built. Use [`SimulationParams::builder`] to construct
/// instances; `build` validates every field so a constructed value always
/// satisfies the engine's preconditions.
///
/// # Examples
///
/// ```rust
/// use reserve_core::types::SimulationParams;
///
/// let params = SimulationParams::builder()
///     .num_simulations(10_000)
///     .avg_events(150.0)
///     .avg_loss(350.0)
///     .volatility(40.0)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.num_simulations(), 10_000);
/// assert_eq!(params.avg_events(), 150.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    /// Number of independent monthly trials.
    num_simulations: usize,
    /// Expected fraud events per month.
    avg_events: f64,
    /// Expected loss per individual event.
    avg_loss: f64,
    /// Per-event loss standard deviation as a percent of `avg_loss`.
    volatility: f64,
}

impl SimulationParams {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParamsBuilder {
        SimulationParamsBuilder::default()
    }

    /// Returns the number of independent monthly trials.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Returns the expected number of fraud events per month.
    #[inline]
    pub fn avg_events(&self) -> f64 {
        self.avg_events
    }

    /// Returns the expected loss per individual event.
    #[inline]
    pub fn avg_loss(&self) -> f64 {
        self.avg_loss
    }

    /// Returns the per-event loss volatility (percent of `avg_loss`).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the absolute per-event loss standard deviation.
    ///
    /// `avg_loss * volatility / 100`.
    #[inline]
    pub fn loss_std_dev(&self) -> f64 {
        self.avg_loss * (self.volatility / 100.0)
    }

    /// Returns the standard deviation of the per-trial event count.
    ///
    /// Fixed at [`EVENT_COUNT_VOLATILITY`] times the expected count.
    #[inline]
    pub fn event_std_dev(&self) -> f64 {
        self.avg_events * EVENT_COUNT_VOLATILITY
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if:
    /// - `num_simulations` is 0 or greater than [`MAX_TRIALS`]
    /// - `avg_events`, `avg_loss`, or `volatility` is negative or non-finite
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_simulations == 0 || self.num_simulations > MAX_TRIALS {
            return Err(SimulationError::InvalidTrialCount(self.num_simulations));
        }
        validate_rate("avg_events", self.avg_events)?;
        validate_rate("avg_loss", self.avg_loss)?;
        validate_rate("volatility", self.volatility)?;
        Ok(())
    }
}

fn validate_rate(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() {
        return Err(SimulationError::invalid(name, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(SimulationError::invalid(
            name,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

/// Builder for [`SimulationParams`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use reserve_core::types::SimulationParams;
///
/// let params = SimulationParams::builder()
///     .num_simulations(2_000)
///     .avg_events(80.0)
///     .avg_loss(500.0)
///     .volatility(25.0)
///     .build()
///     .expect("valid parameters");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationParamsBuilder {
    num_simulations: Option<usize>,
    avg_events: Option<f64>,
    avg_loss: Option<f64>,
    volatility: Option<f64>,
}

impl SimulationParamsBuilder {
    /// Sets the number of independent monthly trials.
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the expected number of fraud events per month.
    #[inline]
    pub fn avg_events(mut self, avg_events: f64) -> Self {
        self.avg_events = Some(avg_events);
        self
    }

    /// Sets the expected loss per individual event.
    #[inline]
    pub fn avg_loss(mut self, avg_loss: f64) -> Self {
        self.avg_loss = Some(avg_loss);
        self
    }

    /// Sets the per-event loss volatility (percent of `avg_loss`).
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if any field is missing or fails
    /// [`SimulationParams::validate`].
    pub fn build(self) -> Result<SimulationParams, SimulationError> {
        let num_simulations = self
            .num_simulations
            .ok_or(SimulationError::invalid("num_simulations", "must be specified"))?;
        let avg_events = self
            .avg_events
            .ok_or(SimulationError::invalid("avg_events", "must be specified"))?;
        let avg_loss = self
            .avg_loss
            .ok_or(SimulationError::invalid("avg_loss", "must be specified"))?;
        let volatility = self
            .volatility
            .ok_or(SimulationError::invalid("volatility", "must be specified"))?;

        let params = SimulationParams {
            num_simulations,
            avg_events,
            avg_loss,
            volatility,
        };

        params.validate()?;
        Ok(params)
    }
}
