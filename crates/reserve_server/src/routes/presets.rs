//! Scenario preset listing
//!
//! `GET /api/v1/presets` returns the named parameter sets the dashboard's
//! preset picker offers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;

use reserve_dashboard::ScenarioPreset;

use super::AppState;

/// One preset on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetInfo {
    /// Stable machine-readable name
    pub name: String,
    /// Human-readable label
    pub label: String,
    /// The parameters the preset stands for
    pub params: PresetParams,
}

/// Preset parameters on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetParams {
    pub num_simulations: usize,
    pub avg_events: f64,
    pub avg_loss: f64,
    pub volatility: f64,
}

impl From<ScenarioPreset> for PresetInfo {
    fn from(preset: ScenarioPreset) -> Self {
        let params = preset.params();
        Self {
            name: preset.name().to_string(),
            label: preset.label().to_string(),
            params: PresetParams {
                num_simulations: params.num_simulations(),
                avg_events: params.avg_events(),
                avg_loss: params.avg_loss(),
                volatility: params.volatility(),
            },
        }
    }
}

/// Build the preset routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/presets", get(presets_handler))
}

/// GET /api/v1/presets - list scenario presets
async fn presets_handler() -> impl IntoResponse {
    let presets: Vec<PresetInfo> = ScenarioPreset::all().into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(presets))
}
