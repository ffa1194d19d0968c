//! Repository for tasks.

use chrono::Utc;

use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::repositories::fresh_id;
use crate::store::{Change, JsonStore, StoreError};

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Add a task to the board of `project_id`.
    ///
    /// Returns `None` (and writes nothing) if the project does not exist.
    pub async fn create(
        store: &JsonStore,
        project_id: &str,
        input: &CreateTask,
    ) -> Result<Option<Task>, StoreError> {
        let task = store
            .modify(|data| {
                if !data.projects.iter().any(|p| p.id == project_id) {
                    return Change::Keep(None);
                }
                let id = fresh_id(|id| data.tasks.iter().any(|t| t.id == id));
                let task = Task {
                    id,
                    project_id: project_id.to_string(),
                    title: input.title.clone(),
                    description: input.description.clone(),
                    status: input.status,
                    assignee: input.assignee.clone(),
                    due_date: input.due_date.clone(),
                    priority: input.priority,
                    created_at: Utc::now(),
                };
                data.tasks.push(task.clone());
                Change::Write(Some(task))
            })
            .await?;

        if let Some(task) = &task {
            tracing::info!(task_id = %task.id, project_id = %project_id, "Task created");
        }
        Ok(task)
    }

    /// List the tasks of one project in insertion order.
    ///
    /// An unknown project simply has no tasks.
    pub async fn list_by_project(
        store: &JsonStore,
        project_id: &str,
    ) -> Result<Vec<Task>, StoreError> {
        let data = store.read().await?;
        Ok(data
            .tasks
            .into_iter()
            .filter(|t| t.project_id == project_id)
            .collect())
    }

    /// Update a task. Only `Some` fields in `input` are applied; the owning
    /// project never changes.
    ///
    /// Returns `None` if no task with the given `id` exists.
    pub async fn update(
        store: &JsonStore,
        id: &str,
        input: &UpdateTask,
    ) -> Result<Option<Task>, StoreError> {
        store
            .modify(|data| {
                let Some(task) = data.tasks.iter_mut().find(|t| t.id == id) else {
                    return Change::Keep(None);
                };
                if let Some(title) = &input.title {
                    task.title = title.clone();
                }
                if let Some(description) = &input.description {
                    task.description = description.clone();
                }
                if let Some(status) = input.status {
                    task.status = status;
                }
                if let Some(assignee) = &input.assignee {
                    task.assignee = assignee.clone();
                }
                if let Some(due_date) = &input.due_date {
                    task.due_date = due_date.clone();
                }
                if let Some(priority) = input.priority {
                    task.priority = priority;
                }
                Change::Write(Some(task.clone()))
            })
            .await
    }

    /// Delete a task. Returns `true` if it existed.
    pub async fn delete(store: &JsonStore, id: &str) -> Result<bool, StoreError> {
        let deleted = store
            .modify(|data| {
                let before = data.tasks.len();
                data.tasks.retain(|t| t.id != id);
                if data.tasks.len() == before {
                    Change::Keep(false)
                } else {
                    Change::Write(true)
                }
            })
            .await?;

        if deleted {
            tracing::info!(task_id = %id, "Task deleted");
        }
        Ok(deleted)
    }
}
