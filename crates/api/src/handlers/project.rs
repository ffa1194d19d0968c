//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::board::require_text;
use taskboard_core::coercion::TextValue;
use taskboard_core::error::CoreError;
use taskboard_db::models::project::{CreateProject, Project, UpdateProject};
use taskboard_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /api/projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<TextValue>,
    pub description: Option<TextValue>,
}

impl CreateProjectRequest {
    /// Trim and require `name`, default `description` to empty.
    pub fn into_input(self) -> Result<CreateProject, CoreError> {
        Ok(CreateProject {
            name: require_text(self.name, "Name is required")?,
            description: TextValue::or_empty(self.description),
        })
    }
}

/// Request body for `PATCH /api/projects/{id}`. Omitted fields stay as they are.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<TextValue>,
    pub description: Option<TextValue>,
}

impl From<UpdateProjectRequest> for UpdateProject {
    fn from(body: UpdateProjectRequest) -> Self {
        UpdateProject {
            name: body.name.map(TextValue::into_string),
            description: body.description.map(TextValue::into_string),
        }
    }
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.store).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = body.into_input()?;
    let project = ProjectRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateProjectRequest>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.store, &id, &body.into())
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Also removes every task of the project.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OkResponse>> {
    if ProjectRepo::delete(&state.store, &id).await? {
        Ok(Json(OkResponse::ok()))
    } else {
        Err(AppError::not_found("Project", id))
    }
}
