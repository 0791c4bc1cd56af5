use axum::{routing::get, Router};

use crate::{
    handlers::{health_check, hello, root},
    middleware::create_middleware_stack,
    state::AppState,
};

pub const ROOT_PATH: &str = "/";
pub const HELLO_PATH: &str = "/hello";
pub const HEALTH_PATH: &str = "/health";

/// Create the Axum router with all endpoints and middleware.
/// Unknown paths fall through to axum's 404, other methods on known paths to 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(ROOT_PATH, get(root))
        .route(HELLO_PATH, get(hello))
        // Liveness/readiness probe
        .route(HEALTH_PATH, get(health_check))
        .with_state(state)
        .layer(create_middleware_stack())
}
