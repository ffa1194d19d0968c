//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use taskboard_core::types::{EntityId, Timestamp};

/// A project as stored in the dataset and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new project. `name` is already trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}
