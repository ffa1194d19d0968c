//! File-backed persistence for projects and tasks.
//!
//! The whole dataset lives in one JSON document. [`JsonStore`] owns that
//! file; the repositories run their read-modify-write cycles through it.

use std::path::PathBuf;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{Change, JsonStore, StoreError};

/// Open the dataset file at `path`, creating an empty one if it is missing.
pub async fn open_store(path: impl Into<PathBuf>) -> Result<JsonStore, StoreError> {
    let store = JsonStore::new(path);
    store.ensure().await?;
    Ok(store)
}
