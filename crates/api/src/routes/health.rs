use axum::{routing::get, Json, Router};

use crate::response::OkResponse;
use crate::state::AppState;

/// GET /health -- liveness check.
async fn health_check() -> Json<OkResponse> {
    Json(OkResponse::ok())
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
