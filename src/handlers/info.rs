// Info handlers
// Static service description and greeting

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tracing::debug;

use crate::models::{HelloInfo, RootInfo};

/// Describe the API and list its endpoints
/// GET /
pub async fn root() -> impl IntoResponse {
    debug!("Serving API description");

    (StatusCode::OK, Json(RootInfo::default()))
}

/// Greet the caller with the current time
/// GET /hello
pub async fn hello() -> impl IntoResponse {
    let info = HelloInfo::at(Utc::now());
    debug!("Serving greeting at {}", info.timestamp);

    (StatusCode::OK, Json(info))
}
