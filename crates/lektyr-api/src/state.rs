//! Shared application state for the Axum router.

use std::sync::Arc;

use lektyr_core::BookStore;

use crate::config::ApiConfig;

/// Shared state passed to all route handlers.
///
/// Cheap to clone; both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The catalog backend (JSON file or in-memory).
    pub store: Arc<dyn BookStore>,
    /// Server configuration.
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Creates state over the given store and configuration.
    pub fn new(store: Arc<dyn BookStore>, config: ApiConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
