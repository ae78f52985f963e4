//! Fetch, list, single-lookup, and purge handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;

use crate::error::AppError;
use crate::models::MirroredUserResponse;
use crate::state::AppState;

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users/fetch", post(fetch_users))
        .route("/api/users", get(list_users).delete(delete_users))
        .route("/api/users/{id}", get(get_user))
}

/// Response for a successful fetch-and-save.
#[derive(Debug, Serialize)]
struct FetchResponse {
    success: bool,
    message: String,
    data: Vec<MirroredUserResponse>,
}

/// Response wrapper used by the read endpoints.
#[derive(Debug, Serialize)]
struct DataResponse<T> {
    success: bool,
    data: T,
}

/// Response for a successful purge.
#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    message: &'static str,
}

/// `POST /api/users/fetch` - pull the feed and upsert every record.
///
/// Upserts run one record at a time and are not atomic as a batch: a
/// failure partway through aborts the request with 500, but documents
/// already upserted stay persisted.
async fn fetch_users(
    State(state): State<AppState>,
) -> Result<Json<FetchResponse>, AppError> {
    let feed = state
        .fetcher()
        .fetch_users()
        .await
        .map_err(|e| AppError::external("Failed to fetch and save users", e))?;

    let mut saved = Vec::with_capacity(feed.len());
    for user in &feed {
        let document = state
            .repository()
            .upsert(user)
            .await
            .map_err(|e| AppError::store("Failed to fetch and save users", e))?;
        saved.push(MirroredUserResponse::from(document));
    }

    tracing::info!(count = saved.len(), "Mirrored user feed");

    Ok(Json(FetchResponse {
        success: true,
        message: format!("{} users saved successfully", saved.len()),
        data: saved,
    }))
}

/// `GET /api/users` - all mirrored documents, sorted by external id.
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<MirroredUserResponse>>>, AppError> {
    let users = state
        .repository()
        .list()
        .await
        .map_err(|e| AppError::store("Failed to get users", e))?;

    Ok(Json(DataResponse {
        success: true,
        data: users.into_iter().map(MirroredUserResponse::from).collect(),
    }))
}

/// `GET /api/users/{id}` - one mirrored document by external id.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<MirroredUserResponse>>, AppError> {
    let user = state
        .repository()
        .find_by_external_id(id)
        .await
        .map_err(|e| AppError::store("Failed to get user", e))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(DataResponse {
        success: true,
        data: MirroredUserResponse::from(user),
    }))
}

/// `DELETE /api/users` - purge the mirrored collection.
async fn delete_users(State(state): State<AppState>) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state
        .repository()
        .delete_all()
        .await
        .map_err(|e| AppError::store("Failed to delete users", e))?;

    tracing::info!(deleted, "Mirrored users purged");

    Ok(Json(DeleteResponse {
        success: true,
        message: "All users deleted successfully",
    }))
}
