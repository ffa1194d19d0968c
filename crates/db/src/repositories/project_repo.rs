//! Repository for projects.

use chrono::Utc;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::fresh_id;
use crate::store::{Change, JsonStore, StoreError};

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Append a new project, returning it with its generated id and
    /// creation timestamp.
    pub async fn create(store: &JsonStore, input: &CreateProject) -> Result<Project, StoreError> {
        let project = store
            .modify(|data| {
                let id = fresh_id(|id| data.projects.iter().any(|p| p.id == id));
                let project = Project {
                    id,
                    name: input.name.clone(),
                    description: input.description.clone(),
                    created_at: Utc::now(),
                };
                data.projects.push(project.clone());
                Change::Write(project)
            })
            .await?;

        tracing::info!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    /// List all projects in insertion order.
    pub async fn list(store: &JsonStore) -> Result<Vec<Project>, StoreError> {
        Ok(store.read().await?.projects)
    }

    /// Update a project. Only `Some` fields in `input` are applied.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(
        store: &JsonStore,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        store
            .modify(|data| {
                let Some(project) = data.projects.iter_mut().find(|p| p.id == id) else {
                    return Change::Keep(None);
                };
                if let Some(name) = &input.name {
                    project.name = name.clone();
                }
                if let Some(description) = &input.description {
                    project.description = description.clone();
                }
                Change::Write(Some(project.clone()))
            })
            .await
    }

    /// Delete a project together with every task that belongs to it.
    ///
    /// Returns `true` if the project existed.
    pub async fn delete(store: &JsonStore, id: &str) -> Result<bool, StoreError> {
        let removed_tasks = store
            .modify(|data| {
                let before = data.projects.len();
                data.projects.retain(|p| p.id != id);
                if data.projects.len() == before {
                    return Change::Keep(None);
                }
                let tasks_before = data.tasks.len();
                data.tasks.retain(|t| t.project_id != id);
                Change::Write(Some(tasks_before - data.tasks.len()))
            })
            .await?;

        match removed_tasks {
            Some(count) => {
                tracing::info!(project_id = %id, removed_tasks = count, "Project deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use taskboard_core::board::TaskStatus;

    use super::*;
    use crate::models::task::CreateTask;
    use crate::repositories::TaskRepo;

    fn new_project(name: &str) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            description: String::new(),
        }
    }

    async fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("data.json"));
        store.ensure().await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let (_dir, store) = temp_store().await;
        let before = Utc::now();

        let a = ProjectRepo::create(&store, &new_project("A")).await.unwrap();
        let b = ProjectRepo::create(&store, &new_project("B")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(a.created_at >= before);
        assert!(a.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let (_dir, store) = temp_store().await;
        for name in ["first", "second", "third"] {
            ProjectRepo::create(&store, &new_project(name)).await.unwrap();
        }

        let names: Vec<_> = ProjectRepo::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn update_only_touches_supplied_fields() {
        let (_dir, store) = temp_store().await;
        let project = ProjectRepo::create(&store, &new_project("Keep me")).await.unwrap();

        let input = UpdateProject {
            description: Some("x".into()),
            ..Default::default()
        };
        let updated = ProjectRepo::update(&store, &project.id, &input)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Keep me");
        assert_eq!(updated.description, "x");
        assert_eq!(updated.created_at, project.created_at);
    }

    #[tokio::test]
    async fn update_unknown_returns_none() {
        let (_dir, store) = temp_store().await;
        let result = ProjectRepo::update(&store, "missing", &UpdateProject::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_cascades_to_tasks() {
        let (_dir, store) = temp_store().await;
        let doomed = ProjectRepo::create(&store, &new_project("Doomed")).await.unwrap();
        let kept = ProjectRepo::create(&store, &new_project("Kept")).await.unwrap();
        let task = CreateTask {
            title: "t".into(),
            status: TaskStatus::Done,
            ..Default::default()
        };
        TaskRepo::create(&store, &doomed.id, &task).await.unwrap();
        TaskRepo::create(&store, &doomed.id, &task).await.unwrap();
        TaskRepo::create(&store, &kept.id, &task).await.unwrap();

        assert!(ProjectRepo::delete(&store, &doomed.id).await.unwrap());

        let data = store.read().await.unwrap();
        assert_eq!(data.projects.len(), 1);
        assert_eq!(data.tasks.len(), 1);
        assert_eq!(data.tasks[0].project_id, kept.id);
    }

    #[tokio::test]
    async fn delete_unknown_returns_false() {
        let (_dir, store) = temp_store().await;
        assert!(!ProjectRepo::delete(&store, "missing").await.unwrap());
    }
}
