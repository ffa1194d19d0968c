//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-scoped task routes under `/projects/{id}/tasks`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// PATCH  /{id}             -> update
/// DELETE /{id}             -> delete (cascades to tasks)
///
/// GET    /{id}/tasks       -> task::list_by_project
/// POST   /{id}/tasks       -> task::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", patch(project::update).delete(project::delete))
        .route(
            "/{id}/tasks",
            get(task::list_by_project).post(task::create),
        )
}
