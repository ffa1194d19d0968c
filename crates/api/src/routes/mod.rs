pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                      GET
///
/// /projects                    list, create
/// /projects/{id}               update (PATCH), delete
/// /projects/{id}/tasks         list, create
///
/// /tasks/{id}                  update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
