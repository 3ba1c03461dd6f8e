//! Simulation result and percentile table.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::stats;

/// Nearest-rank percentile table over a sorted loss sample.
///
/// Holds one value per integer rank 1..=99. Rank 50 is guaranteed to equal
/// the sample median: it is overwritten after the generic nearest-rank pass
/// so the two measures can never disagree through rounding.
///
/// Serialises as a JSON map from rank to value (`{"1": ..., "99": ...}`),
/// the shape the dashboard's percentile slider consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct PercentileTable {
    /// Value for rank `p` lives at index `p - 1`.
    values: Vec<f64>,
}

impl PercentileTable {
    /// Builds the table from an ascending-sorted sample.
    ///
    /// Uses the nearest-rank method: rank `p` maps to `sorted[n * p / 100]`
    /// with the index clamped to `n - 1`. The clamp is unreachable for
    /// p <= 99 but kept for robustness at the boundary.
    ///
    /// The caller supplies the median separately so rank 50 matches it
    /// exactly regardless of how the nearest-rank index rounds.
    pub(crate) fn from_sorted(sorted: &[f64], median: f64) -> Self {
        let mut values: Vec<f64> = (1..=99u8)
            .map(|p| stats::percentile_sorted(sorted, p))
            .collect();
        values[49] = median;
        Self { values }
    }

    /// Returns the value at rank `p`, or `None` for ranks outside 1..=99.
    #[inline]
    pub fn get(&self, p: u8) -> Option<f64> {
        if (1..=99).contains(&p) {
            Some(self.values[p as usize - 1])
        } else {
            None
        }
    }

    /// Iterates over `(rank, value)` pairs in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| (i as u8 + 1, v))
    }
}

impl Serialize for PercentileTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (rank, value) in self.iter() {
            map.serialize_entry(&rank, &value)?;
        }
        map.end()
    }
}

/// Result of one simulation run.
///
/// Immutable once constructed; a fresh result is produced per run with no
/// caching or incremental update. The loss sample is sorted ascending before
/// any statistic is derived from it.
///
/// # Examples
///
/// ```rust
/// use reserve_core::types::SimulationResult;
///
/// let result = SimulationResult::from_sorted_losses(vec![0.0, 10.0, 20.0, 30.0]);
///
/// assert_eq!(result.mean(), 15.0);
/// assert_eq!(result.median(), 20.0); // upper-middle element for even n
/// assert_eq!(result.percentiles().get(50), Some(20.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Full empirical distribution, sorted ascending.
    monthly_losses: Vec<f64>,
    /// Arithmetic mean of the sample.
    mean: f64,
    /// Upper-middle element of the sorted sample.
    median: f64,
    /// Population standard deviation (denominator `n`).
    std_dev: f64,
    /// Nearest-rank percentile table, ranks 1..=99.
    percentiles: PercentileTable,
}

impl SimulationResult {
    /// Derives all statistics from an ascending-sorted, non-empty sample.
    ///
    /// # Panics
    ///
    /// Panics on an empty sample. The engine validates `num_simulations >= 1`
    /// before any trial runs, so an empty sample cannot reach this point
    /// through [`simulate`](https://docs.rs/reserve_engine) — the panic only
    /// guards direct misuse of the constructor.
    pub fn from_sorted_losses(monthly_losses: Vec<f64>) -> Self {
        assert!(!monthly_losses.is_empty(), "loss sample must be non-empty");
        debug_assert!(monthly_losses.windows(2).all(|w| w[0] <= w[1]));

        let mean = stats::mean(&monthly_losses);
        let median = stats::median_sorted(&monthly_losses);
        let std_dev = stats::population_std_dev(&monthly_losses, mean);
        let percentiles = PercentileTable::from_sorted(&monthly_losses, median);

        Self {
            monthly_losses,
            mean,
            median,
            std_dev,
            percentiles,
        }
    }

    /// Returns the full empirical distribution, sorted ascending.
    #[inline]
    pub fn monthly_losses(&self) -> &[f64] {
        &self.monthly_losses
    }

    /// Returns the arithmetic mean of the sample.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the median (upper-middle element of the sorted sample).
    #[inline]
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Returns the population standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Returns the percentile table.
    #[inline]
    pub fn percentiles(&self) -> &PercentileTable {
        &self.percentiles
    }

    /// Returns the reserve covering monthly losses at the given confidence
    /// level, i.e. the loss value at percentile rank `confidence`.
    ///
    /// Returns `None` for ranks outside 1..=99.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reserve_core::types::SimulationResult;
    ///
    /// let result = SimulationResult::from_sorted_losses((0..100).map(f64::from).collect());
    /// assert_eq!(result.reserve_at(95), Some(95.0));
    /// assert_eq!(result.reserve_at(0), None);
    /// ```
    #[inline]
    pub fn reserve_at(&self, confidence: u8) -> Option<f64> {
        self.percentiles.get(confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_value_sample() {
        let result = SimulationResult::from_sorted_losses(vec![42.0]);

        assert_eq!(result.mean(), 42.0);
        assert_eq!(result.median(), 42.0);
        assert_eq!(result.std_dev(), 0.0);
        for p in 1..=99 {
            assert_eq!(result.percentiles().get(p), Some(42.0));
        }
    }

    #[test]
    fn test_even_sample_uses_upper_middle_median() {
        let result = SimulationResult::from_sorted_losses(vec![1.0, 2.0, 3.0, 4.0]);

        // index n/2 = 2, not the average of 2.0 and 3.0
        assert_eq!(result.median(), 3.0);
    }

    #[test]
    fn test_population_std_dev() {
        let result = SimulationResult::from_sorted_losses(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        // denominator n, the classic example with sigma = 2
        assert_relative_eq!(result.std_dev(), 2.0);
    }

    #[test]
    fn test_percentile_50_equals_median() {
        let result = SimulationResult::from_sorted_losses(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        assert_eq!(result.percentiles().get(50), Some(result.median()));
    }

    #[test]
    fn test_percentiles_of_uniform_ramp() {
        let result = SimulationResult::from_sorted_losses((0..100).map(f64::from).collect());

        // n = 100: rank p maps straight to index p
        assert_eq!(result.percentiles().get(1), Some(1.0));
        assert_eq!(result.percentiles().get(95), Some(95.0));
        assert_eq!(result.percentiles().get(99), Some(99.0));
    }

    #[test]
    fn test_percentile_table_bounds() {
        let result = SimulationResult::from_sorted_losses(vec![1.0, 2.0]);

        assert_eq!(result.percentiles().get(0), None);
        assert_eq!(result.percentiles().get(100), None);
        assert!(result.percentiles().get(99).is_some());
    }

    #[test]
    fn test_percentile_monotonicity() {
        let losses: Vec<f64> = (0..73).map(|i| (i * i) as f64).collect();
        let result = SimulationResult::from_sorted_losses(losses);

        for p in 1..99 {
            assert!(result.percentiles().get(p).unwrap() <= result.percentiles().get(p + 1).unwrap());
        }
    }

    #[test]
    fn test_reserve_at_confidence() {
        let result = SimulationResult::from_sorted_losses((0..200).map(f64::from).collect());

        // n = 200: rank p maps to index 2p
        assert_eq!(result.reserve_at(95), Some(190.0));
        assert_eq!(result.reserve_at(100), None);
    }

    #[test]
    fn test_serialises_percentiles_as_map() {
        let result = SimulationResult::from_sorted_losses(vec![1.0, 2.0, 3.0, 4.0]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["percentiles"]["50"], json["median"]);
        assert!(json["stdDev"].is_f64());
        assert_eq!(json["monthlyLosses"].as_array().unwrap().len(), 4);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_empty_sample_panics() {
        let _ = SimulationResult::from_sorted_losses(Vec::new());
    }
}
