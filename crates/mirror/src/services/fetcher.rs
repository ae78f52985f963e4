//! Client for the external user feed.

use crate::models::ExternalUser;

/// Fetches the fixed-size user list from the configured feed URL.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    source_url: String,
}

impl Fetcher {
    /// Create a fetcher for the given feed URL.
    #[must_use]
    pub fn new(source_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            source_url,
        }
    }

    /// One GET against the feed, decoded as a user list.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` on network failure, a non-success status,
    /// or a payload that does not decode.
    pub async fn fetch_users(&self) -> Result<Vec<ExternalUser>, reqwest::Error> {
        self.http
            .get(&self.source_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
