//! Unified error handling for the mailer.
//!
//! Validation failures are reported to the caller with their message;
//! relay failures are not - those answer a generic 500 while the SMTP
//! error goes to the log. This is the opposite of the cart services,
//! which leak store error text by design.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use shoplab_core::EmailError;

use crate::services::email::EmailSendError;

/// Application-level error type for the mailer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body had no email field.
    #[error("Email address is required")]
    MissingEmail,

    /// The submitted address failed validation.
    #[error("Invalid email address")]
    InvalidEmail(#[source] EmailError),

    /// The relay rejected the message or was unreachable.
    #[error("Failed to send email")]
    Send(#[source] EmailSendError),
}

/// `{success: false, error}` body used for every mailer failure.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The relay error is logged, never returned to the caller
        if let Self::Send(source) = &self {
            tracing::error!(error = %source, "Email sending failed");
        }

        let status = match &self {
            Self::MissingEmail | Self::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            Self::Send(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_email_is_400() {
        let response = AppError::MissingEmail.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_email_is_400() {
        let err = AppError::InvalidEmail(EmailError::InvalidAtSymbol);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_send_failure_message_is_generic() {
        let err = AppError::Send(EmailSendError::InvalidAddress("x".to_owned()));
        assert_eq!(err.to_string(), "Failed to send email");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
