use std::sync::Arc;

use taskboard_db::JsonStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the dataset file.
    pub store: Arc<JsonStore>,
}
