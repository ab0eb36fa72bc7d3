use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

/// GET /healthz
/// Liveness probe. Reports the configured service name.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.config.service_name.clone(),
    })
}

/// GET /readyz
/// Readiness probe. The service holds no dependencies, so it is ready once listening.
pub async fn ready_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
