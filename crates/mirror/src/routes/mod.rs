//! HTTP route handlers for the mirror.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health          - Health check
//! POST   /api/users/fetch - Fetch the feed and upsert every record
//! GET    /api/users       - List mirrored documents (sorted by externalId)
//! GET    /api/users/{id}  - One mirrored document by external id
//! DELETE /api/users       - Remove all mirrored documents
//! ```

pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the complete route table.
pub fn routes() -> Router<AppState> {
    users::router()
}
