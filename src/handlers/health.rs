use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tracing::debug;

use crate::{models::HealthInfo, state::AppState};

/// Health check handler
/// GET /health
/// Reports uptime since start; reads the clock only, so it never blocks or fails.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let info = HealthInfo::healthy(state.uptime(), Utc::now());
    debug!(uptime = info.uptime, "Health check endpoint accessed");

    (StatusCode::OK, Json(info))
}
