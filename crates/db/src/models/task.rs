//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use taskboard_core::board::{TaskPriority, TaskStatus};
use taskboard_core::types::{EntityId, Timestamp};

/// A task card on a project's board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    /// Owning project. Fixed at creation.
    pub project_id: EntityId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee: String,
    /// Free-form date text, not validated.
    pub due_date: String,
    pub priority: TaskPriority,
    pub created_at: Timestamp,
}

/// DTO for creating a new task. Enum fields are already coerced.
#[derive(Debug, Clone, Default)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee: String,
    pub due_date: String,
    pub priority: TaskPriority,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<TaskPriority>,
}
