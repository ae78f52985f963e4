//! Unified error handling for the mirror.
//!
//! Every failure except a missing document answers 500 with a generic,
//! endpoint-specific message; the underlying store or network error goes
//! to the log only, unlike the cart services which leak store text.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type for the mirror.
#[derive(Debug, Error)]
pub enum AppError {
    /// No mirrored document with the requested external id.
    #[error("User not found")]
    NotFound,

    /// The external feed could not be fetched or decoded.
    #[error("{message}")]
    External {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A store operation failed.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
}

impl AppError {
    /// Feed failure with the generic message for the failing endpoint.
    #[must_use]
    pub const fn external(message: &'static str, source: reqwest::Error) -> Self {
        Self::External { message, source }
    }

    /// Store failure with the generic message for the failing endpoint.
    #[must_use]
    pub const fn store(message: &'static str, source: mongodb::error::Error) -> Self {
        Self::Store { message, source }
    }
}

/// `{success: false, error}` body used for every mirror failure.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The underlying error is logged, never returned to the caller
        match &self {
            Self::External { source, .. } => {
                tracing::error!(error = %source, "External feed request failed");
            }
            Self::Store { source, .. } => {
                tracing::error!(error = %source, "Store operation failed");
            }
            Self::NotFound => {}
        }

        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::External { .. } | Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
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
    fn test_not_found_is_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_keeps_generic_message() {
        let err = AppError::store(
            "Failed to get users",
            mongodb::error::Error::custom("connection reset".to_owned()),
        );
        assert_eq!(err.to_string(), "Failed to get users");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
