//! Application state shared across handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the single long-lived ORM
/// connection.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: DatabaseConnection,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db }),
        }
    }

    /// Get a reference to the ORM connection.
    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.inner.db
    }
}
