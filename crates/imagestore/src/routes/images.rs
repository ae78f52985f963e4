//! Upload, listing, metadata, and delete handlers.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::{get, post},
};
use serde::Serialize;

use crate::error::AppError;
use crate::services::images::{
    ALLOWED_CONTENT_TYPES, ImageDetails, ImageSummary, MAX_IMAGE_BYTES, StoredImage,
    is_safe_filename,
};
use crate::state::AppState;

/// Build the images router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/images/upload", post(upload_image))
        .route("/api/images", get(list_images))
        .route(
            "/api/images/{filename}",
            get(get_image).delete(delete_image),
        )
}

/// Response for a successful upload.
#[derive(Debug, Serialize)]
struct UploadResponse {
    success: bool,
    message: &'static str,
    data: StoredImage,
}

/// Response wrapper used by the read endpoints.
#[derive(Debug, Serialize)]
struct DataResponse<T> {
    success: bool,
    data: T,
}

/// Response for a successful delete.
#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    message: &'static str,
}

/// `POST /api/images/upload` - accept at most one image file.
///
/// The content-type allow-list and the 5 MiB ceiling are both enforced
/// before the file is persisted; an oversized upload is dropped mid-stream
/// with its own 400, distinct from the type rejection.
async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        let mimetype = field
            .content_type()
            .ok_or(AppError::InvalidFileType)?
            .to_owned();
        if !ALLOWED_CONTENT_TYPES.contains(&mimetype.as_str()) {
            return Err(AppError::InvalidFileType);
        }

        let original_name = field.file_name().unwrap_or_default().to_owned();

        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if data.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(AppError::FileTooLarge);
            }
            data.extend_from_slice(&chunk);
        }

        let stored = state.store().save(&original_name, &mimetype, &data).await?;
        tracing::info!(filename = %stored.filename, size = stored.size, "Image uploaded");

        return Ok(Json(UploadResponse {
            success: true,
            message: "Image uploaded successfully",
            data: stored,
        }));
    }

    Err(AppError::MissingFile)
}

/// `GET /api/images` - live directory scan filtered by extension.
async fn list_images(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ImageSummary>>>, AppError> {
    let images = state.store().list().await?;

    Ok(Json(DataResponse {
        success: true,
        data: images,
    }))
}

/// `GET /api/images/{filename}` - metadata for one stored file.
async fn get_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DataResponse<ImageDetails>>, AppError> {
    if !is_safe_filename(&filename) {
        return Err(AppError::InvalidFilename);
    }

    let details = state
        .store()
        .details(&filename)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(DataResponse {
        success: true,
        data: details,
    }))
}

/// `DELETE /api/images/{filename}` - remove one stored file.
async fn delete_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !is_safe_filename(&filename) {
        return Err(AppError::InvalidFilename);
    }

    if !state.store().delete(&filename).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(filename = %filename, "Image deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: "Image deleted successfully",
    }))
}
