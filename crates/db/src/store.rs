//! Whole-document JSON storage.
//!
//! Every operation loads the complete [`Dataset`] from disk and, when it
//! changes something, writes the complete dataset back. Access is
//! serialized through an async mutex, so concurrent read-modify-write
//! cycles cannot drop each other's changes.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::models::dataset::Dataset;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors surfaced by [`JsonStore`]. A corrupt document is not an error: it
/// is reset to an empty dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading, writing or renaming the dataset file failed.
    #[error("Dataset I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory dataset could not be encoded.
    #[error("Dataset serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Change
// ---------------------------------------------------------------------------

/// Result of a [`JsonStore::modify`] closure.
#[derive(Debug)]
pub enum Change<T> {
    /// The dataset was mutated and must be written back.
    Write(T),
    /// Nothing changed; the file is left untouched.
    Keep(T),
}

// ---------------------------------------------------------------------------
// JsonStore
// ---------------------------------------------------------------------------

/// Storage gateway for the single dataset file.
pub struct JsonStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Create a gateway for `path`. Nothing is touched on disk until
    /// [`ensure`](Self::ensure) or the first read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with an empty dataset if it does not exist yet.
    /// An existing file is left alone, even if its content is corrupt.
    pub async fn ensure(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        self.persist(&Dataset::default()).await?;
        tracing::info!(path = %self.path.display(), "Created empty dataset file");
        Ok(())
    }

    /// Load the full dataset.
    pub async fn read(&self) -> Result<Dataset, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Replace the full dataset on disk.
    pub async fn write(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.persist(dataset).await
    }

    /// Run one read-modify-write cycle.
    ///
    /// `f` receives the freshly loaded dataset. If it returns
    /// [`Change::Write`], the mutated dataset is persisted before the lock
    /// is released.
    pub async fn modify<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Dataset) -> Change<T>,
    {
        let _guard = self.lock.lock().await;
        let mut dataset = self.load().await?;
        match f(&mut dataset) {
            Change::Write(value) => {
                self.persist(&dataset).await?;
                Ok(value)
            }
            Change::Keep(value) => Ok(value),
        }
    }

    // ---- private helpers ----

    /// Read and decode the file. Caller must hold the lock.
    async fn load(&self) -> Result<Dataset, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Dataset file missing, recreating");
                let empty = Dataset::default();
                self.persist(&empty).await?;
                return Ok(empty);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Dataset>(&bytes) {
            Ok(dataset) => Ok(dataset),
            Err(e) => {
                // No backup is kept: the corrupt content is discarded.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Dataset file is corrupt, resetting to an empty dataset"
                );
                let empty = Dataset::default();
                self.persist(&empty).await?;
                Ok(empty)
            }
        }
    }

    /// Encode and write the file via a temp file + rename. Caller must hold
    /// the lock.
    async fn persist(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(dataset)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            projects = dataset.projects.len(),
            tasks = dataset.tasks.len(),
            "Dataset written"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
