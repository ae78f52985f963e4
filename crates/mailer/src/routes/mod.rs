//! HTTP route handlers for the mailer.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Health check
//! POST /api/email/send  - Validate an address and relay the welcome email
//! ```

pub mod email;

use axum::Router;

use crate::state::AppState;

/// Build the complete route table.
pub fn routes() -> Router<AppState> {
    email::router()
}
