//! Descriptive statistics over a loss sample.
//!
//! Small pure kernels shared by the engine and the result constructor. All
//! of them assume a non-empty slice; median and percentile lookups
//! additionally assume the slice is sorted ascending.

/// Arithmetic mean of the sample.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an ascending-sorted sample.
///
/// Uses the element at index `n / 2`. For even `n` this is the upper-middle
/// element, not the average of the two middles — preserved behaviour that
/// keeps the median identical to the nearest-rank 50th percentile overwrite.
#[inline]
pub fn median_sorted(sorted: &[f64]) -> f64 {
    sorted[sorted.len() / 2]
}

/// Population standard deviation (denominator `n`, not `n - 1`).
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Nearest-rank percentile of an ascending-sorted sample.
///
/// Rank `p` in 1..=99 maps to index `n * p / 100`, clamped to `n - 1`. No
/// interpolation between neighbouring ranks.
#[inline]
pub fn percentile_sorted(sorted: &[f64], p: u8) -> f64 {
    let n = sorted.len();
    sorted[(n * p as usize / 100).min(n - 1)]
}
