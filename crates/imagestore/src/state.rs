//! Application state shared across handlers.

use std::sync::Arc;

use crate::services::images::ImageStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: ImageStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: ImageStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get a reference to the image store.
    #[must_use]
    pub fn store(&self) -> &ImageStore {
        &self.inner.store
    }
}
