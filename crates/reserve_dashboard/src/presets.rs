//! Preset scenarios for the dashboard's parameter picker.
//!
//! Ready-to-use parameter sets covering the typical range a risk analyst
//! explores: the calibrated baseline, a seasonal spike, a coordinated
//! fraud-ring outbreak, and tightened controls after remediation.

use reserve_core::types::SimulationParams;

/// Default trial count for preset runs: large enough for stable percentile
/// estimates, small enough to stay interactive.
pub const PRESET_TRIALS: usize = 10_000;

/// Named scenario presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioPreset {
    /// Calibrated monthly baseline.
    Baseline,
    /// Holiday-season volume spike: more events, noisier losses.
    PeakSeason,
    /// Coordinated fraud-ring outbreak: high-value correlated hits.
    FraudRing,
    /// Post-remediation: fewer events, tighter per-event losses.
    TightControls,
}

impl ScenarioPreset {
    /// All presets in picker order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Baseline,
            Self::PeakSeason,
            Self::FraudRing,
            Self::TightControls,
        ]
    }

    /// Stable machine-readable name (used on the wire and in the CLI).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::PeakSeason => "peak-season",
            Self::FraudRing => "fraud-ring",
            Self::TightControls => "tight-controls",
        }
    }

    /// Human-readable label for the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline month",
            Self::PeakSeason => "Peak season spike",
            Self::FraudRing => "Fraud ring outbreak",
            Self::TightControls => "Tightened controls",
        }
    }

    /// Parses a machine-readable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.name() == name)
    }

    /// The simulation parameters this preset stands for.
    pub fn params(&self) -> SimulationParams {
        let (avg_events, avg_loss, volatility) = match self {
            Self::Baseline => (150.0, 350.0, 40.0),
            Self::PeakSeason => (280.0, 380.0, 55.0),
            Self::FraudRing => (90.0, 1_200.0, 85.0),
            Self::TightControls => (60.0, 250.0, 25.0),
        };

        SimulationParams::builder()
            .num_simulations(PRESET_TRIALS)
            .avg_events(avg_events)
            .avg_loss(avg_loss)
            .volatility(volatility)
            .build()
            .expect("preset parameters are valid by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_build_valid_params() {
        for preset in ScenarioPreset::all() {
            let params = preset.params();
            assert_eq!(params.num_simulations(), PRESET_TRIALS);
            assert!(params.avg_events() > 0.0);
            assert!(params.avg_loss() > 0.0);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for preset in ScenarioPreset::all() {
            assert_eq!(ScenarioPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(ScenarioPreset::from_name("nonsense"), None);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            ScenarioPreset::all().iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), ScenarioPreset::all().len());
    }
}
