//! Unified error handling for the imagestore.
//!
//! Upload rejections (missing file, bad type, oversized, unsafe name) are
//! all 400s checked before anything touches the disk. Missing files on
//! lookup or delete are 404. Filesystem failures surface their message in
//! a 500, matching the cart services' leak-the-store-error behavior.

use axum::extract::multipart::MultipartError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type for the imagestore.
#[derive(Debug, Error)]
pub enum AppError {
    /// The multipart body had no `image` field.
    #[error("No image file provided")]
    MissingFile,

    /// The declared content type is not an accepted image type.
    #[error("Invalid file type. Only JPEG, PNG and GIF are allowed.")]
    InvalidFileType,

    /// The upload exceeded the size ceiling.
    #[error("File size too large. Maximum size is 5MB")]
    FileTooLarge,

    /// The path parameter is not a plain filename.
    #[error("Invalid filename")]
    InvalidFilename,

    /// The requested file is not on disk.
    #[error("Image not found")]
    NotFound,

    /// The multipart body could not be read.
    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    /// Filesystem failure.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// `{success: false, error}` body used for every imagestore failure.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Io(source) = &self {
            tracing::error!(error = %source, "Filesystem operation failed");
        }

        let status = match &self {
            Self::MissingFile
            | Self::InvalidFileType
            | Self::FileTooLarge
            | Self::InvalidFilename
            | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
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
    fn test_upload_rejections_are_400() {
        assert_eq!(
            AppError::MissingFile.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidFileType.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::FileTooLarge.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_too_large_is_distinct_from_type_rejection() {
        assert_ne!(
            AppError::FileTooLarge.to_string(),
            AppError::InvalidFileType.to_string()
        );
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
