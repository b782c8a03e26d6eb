use crate::application::ml::PredictionEngine;
use crate::application::simulation::simulate_season;
use crate::domain::match_stats::MatchPayload;
use crate::domain::prediction::PredictionResult;
use crate::infrastructure::fixtures_csv::read_fixtures;
use crate::infrastructure::observability::Metrics;
use crate::interfaces::http::dto::{
    ArtifactFlags, DebugInputResponse, HealthResponse, PredictV2Response, SimulateResponse,
    TeamKeys, TeamsResponse, match_payload_from_json,
};
use crate::interfaces::http::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use serde_json::Value;
use std::time::Instant;
use tracing::{Span, field, info, instrument};

pub const ENDPOINTS: [&str; 8] = [
    "GET /",
    "GET /api/health",
    "GET /api/teams",
    "GET /api/debug_input",
    "POST /api/predict",
    "POST /api/predict_v2",
    "POST /api/simulate",
    "GET /metrics",
];

/// Shared handler state; both members are cheap clones over shared data
#[derive(Clone)]
pub struct AppState {
    pub engine: PredictionEngine,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(engine: PredictionEngine, metrics: Metrics) -> Self {
        Self { engine, metrics }
    }

    fn predict(&self, payload: &MatchPayload) -> PredictionResult {
        let span = Span::current();
        span.record("home_team", payload.home_team.as_str());
        span.record("away_team", payload.away_team.as_str());

        let started = Instant::now();
        let trace = self.engine.predict_traced(payload);
        self.metrics
            .record_prediction(&trace, started.elapsed().as_secs_f64());
        info!(branch = %trace.branch, outcome = ?trace.result.outcome, "Prediction served");
        trace.result
    }
}

pub async fn root() -> Json<Value> {
    Json(serde_json::json!({
        "service": "ScoreSight",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ENDPOINTS,
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = state.engine.artifacts().report();
    Json(HealthResponse {
        status: "ok",
        model: "smartcore",
        version: "v2",
        artifacts: ArtifactFlags {
            classifier: report.classifier.is_loaded(),
            regressor: report.regressor.is_loaded(),
            scaler: report.scaler.is_loaded(),
        },
    })
}

pub async fn teams(State(state): State<AppState>) -> Json<TeamsResponse> {
    Json(TeamsResponse {
        teams: state.engine.teams().to_vec(),
    })
}

pub async fn debug_input(State(state): State<AppState>) -> Json<DebugInputResponse> {
    let features = state.engine.features().to_vec();
    let sample_vector = vec![0.0; features.len()];
    Json(DebugInputResponse {
        features,
        sample_vector,
    })
}

#[instrument(skip_all, fields(home_team = field::Empty, away_team = field::Empty))]
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(body) = body?;
    let payload = match_payload_from_json(&body, TeamKeys::PascalFirst)?;
    Ok(Json(state.predict(&payload)))
}

#[instrument(skip_all, fields(home_team = field::Empty, away_team = field::Empty))]
pub async fn predict_v2(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictV2Response>, ApiError> {
    let Json(body) = body?;
    let payload = match_payload_from_json(&body, TeamKeys::SnakeFirst)?;
    let result = state.predict(&payload);
    Ok(Json(PredictV2Response::from(&result)))
}

/// Simulates a season from a CSV fixture list in the request body
#[instrument(skip_all, fields(bytes = body.len()))]
pub async fn simulate(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<SimulateResponse>, ApiError> {
    let fixtures = read_fixtures(body.as_bytes())?;
    state.metrics.inc_simulated("csv", fixtures.len());

    // Rayon fans the predictions out; keep it off the async workers
    let engine = state.engine.clone();
    let standings = tokio::task::spawn_blocking(move || simulate_season(&engine, &fixtures))
        .await
        .map_err(|e| ApiError::Internal(format!("simulation task failed: {}", e)))?;

    Ok(Json(SimulateResponse { standings }))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
