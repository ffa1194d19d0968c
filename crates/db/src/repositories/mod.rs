//! Repositories over the dataset file.
//!
//! Each method is one complete read-modify-write cycle against a
//! [`JsonStore`](crate::JsonStore).

pub mod project_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;

use taskboard_core::types::EntityId;

/// Generate a UUID v4 id that `taken` does not already claim.
fn fresh_id(taken: impl Fn(&str) -> bool) -> EntityId {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}
