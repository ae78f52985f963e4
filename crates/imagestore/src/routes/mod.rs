//! HTTP route handlers for the imagestore.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Health check
//! POST   /api/images/upload       - Upload one image (multipart field "image")
//! GET    /api/images              - List stored images (live directory scan)
//! GET    /api/images/{filename}   - Metadata for one image
//! DELETE /api/images/{filename}   - Remove one image
//! GET    /uploads/*               - Static file serving (wired in main)
//! ```

pub mod images;

use axum::Router;

use crate::state::AppState;

/// Build the complete route table.
pub fn routes() -> Router<AppState> {
    images::router()
}
