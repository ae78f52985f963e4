//! The send endpoint.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use shoplab_core::Email;

use crate::error::AppError;
use crate::middleware;
use crate::state::AppState;

/// Build the email router, with the rate limiter applied to the send
/// route only (the health endpoint stays unthrottled).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/email/send", post(send_email))
        .route_layer(middleware::email_rate_limiter())
}

/// Request body for the send endpoint.
#[derive(Debug, Deserialize)]
struct SendEmailRequest {
    email: Option<String>,
}

/// Response body for a successful send.
#[derive(Debug, Serialize)]
struct SendEmailResponse {
    success: bool,
    message: &'static str,
}

/// `POST /api/email/send` - validate the address, then relay the fixed
/// welcome template.
///
/// Validation happens before any network call: a missing or malformed
/// address is rejected with 400 without contacting the relay.
async fn send_email(
    State(state): State<AppState>,
    Json(body): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, AppError> {
    let Some(raw) = body.email else {
        return Err(AppError::MissingEmail);
    };

    let email = Email::parse(&raw).map_err(AppError::InvalidEmail)?;

    state
        .email()
        .send_welcome(&email)
        .await
        .map_err(AppError::Send)?;

    tracing::info!(to = %email, "Welcome email sent");

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Email sent successfully",
    }))
}
