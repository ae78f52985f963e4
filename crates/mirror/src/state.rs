//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::MirrorRepository;
use crate::services::fetcher::Fetcher;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    repository: MirrorRepository,
    fetcher: Fetcher,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(repository: MirrorRepository, fetcher: Fetcher) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                repository,
                fetcher,
            }),
        }
    }

    /// Get a reference to the mirrored-collection repository.
    #[must_use]
    pub fn repository(&self) -> &MirrorRepository {
        &self.inner.repository
    }

    /// Get a reference to the feed fetcher.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.inner.fetcher
    }
}
