use serde::{Deserialize, Serialize};

use crate::models::project::Project;
use crate::models::task::Task;

/// The full persisted document: `{ "projects": [...], "tasks": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}
