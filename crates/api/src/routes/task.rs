//! Route definitions for the `/tasks` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// PATCH  /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", patch(task::update).delete(task::delete))
}
