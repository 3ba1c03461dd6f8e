//! Equal-width histogram binning for the distribution chart.

use serde::Serialize;

/// One histogram bin: the half-open interval `[lower, upper)` and the
/// number of sample values falling inside it. The last bin is closed so the
/// maximum value is counted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Inclusive lower edge of the bin.
    pub lower: f64,
    /// Upper edge of the bin.
    pub upper: f64,
    /// Number of sample values in the bin.
    pub count: usize,
}

/// Equal-width histogram over a loss sample.
///
/// # Examples
///
/// ```rust
/// use reserve_dashboard::Histogram;
///
/// let sample = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
/// let hist = Histogram::from_sorted(&sample, 5);
///
/// assert_eq!(hist.bins().len(), 5);
/// assert_eq!(hist.total_count(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins an ascending-sorted sample into `n_bins` equal-width bins over
    /// `[min, max]`.
    ///
    /// Degenerate inputs collapse gracefully: an empty sample or `n_bins`
    /// of zero yields an empty histogram, and a constant sample (zero
    /// range) yields a single bin holding every value.
    pub fn from_sorted(sorted: &[f64], n_bins: usize) -> Self {
        if sorted.is_empty() || n_bins == 0 {
            return Self { bins: Vec::new() };
        }

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        if max == min {
            return Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: sorted.len(),
                }],
            };
        }

        let width = (max - min) / n_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..n_bins)
            .map(|i| HistogramBin {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for &value in sorted {
            let idx = (((value - min) / width) as usize).min(n_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Returns the bins in ascending edge order.
    #[inline]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Returns the total count across all bins.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}
