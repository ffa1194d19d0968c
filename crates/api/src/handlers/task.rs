//! Handlers for tasks, both project-scoped (`/projects/{id}/tasks`) and
//! direct (`/tasks/{id}`).
//!
//! `status` and `priority` follow two different policies on purpose:
//! on create an unknown value falls back to the default, on update it is
//! ignored and the stored value is kept.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::board::{require_text, TaskPriority, TaskStatus};
use taskboard_core::coercion::{Choice, TextValue};
use taskboard_core::error::CoreError;
use taskboard_db::models::task::{CreateTask, Task, UpdateTask};
use taskboard_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /api/projects/{id}/tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<TextValue>,
    pub description: Option<TextValue>,
    pub status: Option<Choice<TaskStatus>>,
    pub assignee: Option<TextValue>,
    pub due_date: Option<TextValue>,
    pub priority: Option<Choice<TaskPriority>>,
}

impl CreateTaskRequest {
    /// Trim and require `title`; unknown enum values become the defaults.
    pub fn into_input(self) -> Result<CreateTask, CoreError> {
        Ok(CreateTask {
            title: require_text(self.title, "Title is required")?,
            description: TextValue::or_empty(self.description),
            status: self.status.and_then(Choice::known).unwrap_or_default(),
            assignee: TextValue::or_empty(self.assignee),
            due_date: TextValue::or_empty(self.due_date),
            priority: self.priority.and_then(Choice::known).unwrap_or_default(),
        })
    }
}

/// Request body for `PATCH /api/tasks/{id}`. Omitted fields, and unknown
/// enum values, leave the stored value unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<TextValue>,
    pub description: Option<TextValue>,
    pub status: Option<Choice<TaskStatus>>,
    pub assignee: Option<TextValue>,
    pub due_date: Option<TextValue>,
    pub priority: Option<Choice<TaskPriority>>,
}

impl From<UpdateTaskRequest> for UpdateTask {
    fn from(body: UpdateTaskRequest) -> Self {
        UpdateTask {
            title: body.title.map(TextValue::into_string),
            description: body.description.map(TextValue::into_string),
            status: body.status.and_then(Choice::known),
            assignee: body.assignee.map(TextValue::into_string),
            due_date: body.due_date.map(TextValue::into_string),
            priority: body.priority.and_then(Choice::known),
        }
    }
}

/// GET /api/projects/{id}/tasks
///
/// An unknown project yields an empty list, not a 404.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_project(&state.store, &project_id).await?;
    Ok(Json(tasks))
}

/// POST /api/projects/{id}/tasks
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    JsonBody(body): JsonBody<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let input = body.into_input()?;
    let task = TaskRepo::create(&state.store, &project_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", project_id))?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateTaskRequest>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::update(&state.store, &id, &body.into())
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OkResponse>> {
    if TaskRepo::delete(&state.store, &id).await? {
        Ok(Json(OkResponse::ok()))
    } else {
        Err(AppError::not_found("Task", id))
    }
}
