//! The simulation endpoint
//!
//! `POST /api/v1/simulate` runs one Monte Carlo batch and returns the
//! summary statistics, percentile table, histogram, and recommended reserve
//! the dashboard renders. The raw loss vector is not echoed back: the
//! histogram and percentile table carry everything the charts need.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use reserve_core::types::{PercentileTable, SimulationError, SimulationParams};
use reserve_dashboard::Histogram;
use reserve_engine::{simulate, ReserveRng};

use super::AppState;

/// Simulation request body (camelCase, matching the dashboard's wire format)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimulateRequest {
    /// Number of independent monthly trials
    pub num_simulations: usize,
    /// Expected fraud events per month
    pub avg_events: f64,
    /// Expected loss per individual event
    pub avg_loss: f64,
    /// Per-event loss standard deviation, percent of `avgLoss`
    pub volatility: f64,
    /// Optional seed for a reproducible run; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Percentile rank for the recommended reserve (default from config)
    #[serde(default)]
    pub confidence: Option<u8>,
    /// Histogram bin count (default from config)
    #[serde(default)]
    pub num_bins: Option<usize>,
}

/// Simulation response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    /// Arithmetic mean of the simulated monthly losses
    pub mean: f64,
    /// Median monthly loss
    pub median: f64,
    /// Population standard deviation of monthly losses
    pub std_dev: f64,
    /// Nearest-rank percentile table, ranks 1..=99
    pub percentiles: PercentileTable,
    /// Loss value at the requested confidence rank
    pub recommended_reserve: f64,
    /// The confidence rank the reserve was read at
    pub confidence: u8,
    /// Equal-width histogram of the loss distribution
    pub histogram: Histogram,
    /// Number of trials actually run
    pub num_simulations: usize,
    /// Seed used, when the run was seeded
    pub seed: Option<u64>,
}

/// Structured error body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    fn invalid_parameter(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Self {
                error: "invalid_parameter".to_string(),
                message: message.into(),
            }),
        )
    }

    fn internal(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self {
                error: "internal".to_string(),
                message: message.into(),
            }),
        )
    }
}

/// Build the simulate routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/simulate", post(simulate_handler))
}

/// POST /api/v1/simulate - run one Monte Carlo batch
async fn simulate_handler(
    State(state): State<AppState>,
    Json(request): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.num_simulations > state.config.max_trials {
        return Err(ErrorResponse::invalid_parameter(format!(
            "numSimulations {} exceeds the server cap of {}",
            request.num_simulations, state.config.max_trials
        )));
    }

    let confidence = request.confidence.unwrap_or(state.config.default_confidence);
    if !(1..=99).contains(&confidence) {
        return Err(ErrorResponse::invalid_parameter(format!(
            "confidence must be in 1..=99, got {confidence}"
        )));
    }

    let params = SimulationParams::builder()
        .num_simulations(request.num_simulations)
        .avg_events(request.avg_events)
        .avg_loss(request.avg_loss)
        .volatility(request.volatility)
        .build()
        .map_err(|e: SimulationError| ErrorResponse::invalid_parameter(e.to_string()))?;

    let num_bins = request.num_bins.unwrap_or(state.config.default_bins);
    let seed = request.seed;

    tracing::info!(
        num_simulations = request.num_simulations,
        avg_events = request.avg_events,
        avg_loss = request.avg_loss,
        volatility = request.volatility,
        seed = ?seed,
        "Running simulation"
    );

    // The batch is CPU-bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        let mut rng = match seed {
            Some(seed) => ReserveRng::from_seed(seed),
            None => ReserveRng::from_entropy(),
        };
        simulate(&params, &mut rng)
    })
    .await
    .map_err(|e| ErrorResponse::internal(format!("simulation task failed: {e}")))?
    .map_err(|e| ErrorResponse::invalid_parameter(e.to_string()))?;

    let recommended_reserve = result
        .reserve_at(confidence)
        .ok_or_else(|| ErrorResponse::internal("confidence rank out of table range"))?;
    let histogram = Histogram::from_sorted(result.monthly_losses(), num_bins);

    Ok(Json(SimulateResponse {
        mean: result.mean(),
        median: result.median(),
        std_dev: result.std_dev(),
        percentiles: result.percentiles().clone(),
        recommended_reserve,
        confidence,
        histogram,
        num_simulations: result.monthly_losses().len(),
        seed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(ServerConfig::default()))
    }

    async fn post_simulate(body: &str) -> axum::response::Response {
        let router = routes().with_state(create_test_state());
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/simulate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_simulate_returns_full_payload() {
        let response = post_simulate(
            r#"{"numSimulations": 2000, "avgEvents": 150.0, "avgLoss": 350.0,
                "volatility": 40.0, "seed": 42}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;

        assert_eq!(json["numSimulations"], 2000);
        assert_eq!(json["confidence"], 95);
        assert_eq!(json["seed"], 42);
        assert_eq!(json["percentiles"]["50"], json["median"]);
        assert!(json["recommendedReserve"].is_f64());
        assert_eq!(json["histogram"].as_array().unwrap().len(), 24);
        // raw losses are deliberately absent from the wire payload
        assert!(json.get("monthlyLosses").is_none());
    }

    #[tokio::test]
    async fn test_simulate_is_deterministic_for_fixed_seed() {
        let body = r#"{"numSimulations": 500, "avgEvents": 20.0, "avgLoss": 100.0,
                       "volatility": 30.0, "seed": 7}"#;

        let a = json_body(post_simulate(body).await).await;
        let b = json_body(post_simulate(body).await).await;

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_simulate_honours_confidence_and_bins() {
        let response = post_simulate(
            r#"{"numSimulations": 1000, "avgEvents": 50.0, "avgLoss": 200.0,
                "volatility": 25.0, "seed": 1, "confidence": 99, "numBins": 10}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;

        assert_eq!(json["confidence"], 99);
        assert_eq!(json["histogram"].as_array().unwrap().len(), 10);
        assert_eq!(json["recommendedReserve"], json["percentiles"]["99"]);
    }

    #[tokio::test]
    async fn test_zero_trials_rejected_with_422() {
        let response = post_simulate(
            r#"{"numSimulations": 0, "avgEvents": 10.0, "avgLoss": 100.0, "volatility": 20.0}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert_eq!(json["error"], "invalid_parameter");
    }

    #[tokio::test]
    async fn test_trial_cap_enforced() {
        let response = post_simulate(
            r#"{"numSimulations": 2000000, "avgEvents": 10.0, "avgLoss": 100.0, "volatility": 20.0}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert!(json["message"].as_str().unwrap().contains("server cap"));
    }

    #[tokio::test]
    async fn test_negative_rate_rejected_with_422() {
        let response = post_simulate(
            r#"{"numSimulations": 100, "avgEvents": -5.0, "avgLoss": 100.0, "volatility": 20.0}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert!(json["message"].as_str().unwrap().contains("avg_events"));
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_rejected() {
        let response = post_simulate(
            r#"{"numSimulations": 100, "avgEvents": 5.0, "avgLoss": 100.0,
                "volatility": 20.0, "confidence": 100}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_zero_events_yields_all_zero_statistics() {
        let response = post_simulate(
            r#"{"numSimulations": 50, "avgEvents": 0.0, "avgLoss": 100.0,
                "volatility": 10.0, "seed": 3}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;

        assert_eq!(json["mean"], 0.0);
        assert_eq!(json["median"], 0.0);
        assert_eq!(json["stdDev"], 0.0);
        assert_eq!(json["recommendedReserve"], 0.0);
    }
}
