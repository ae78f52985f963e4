//! User CRUD handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::Serialize;

use shoplab_core::{Action, ActionEnvelope, UserId};

use crate::db::UserRepository;
use crate::error::StoreFailure;
use crate::models::user::{ENTITY, User, UserFields};
use crate::state::AppState;

/// Build the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
}

/// `GET /users` - all users in insertion order.
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ActionEnvelope<Vec<User>>>, StoreFailure> {
    let users = UserRepository::new(state.pool())
        .list()
        .await
        .map_err(|e| StoreFailure::new(Action::Get, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Get, ENTITY, users)))
}

/// `POST /users` - insert and echo the row with its generated id.
async fn create_user(
    State(state): State<AppState>,
    Json(fields): Json<UserFields>,
) -> Result<Json<ActionEnvelope<User>>, StoreFailure> {
    let user = UserRepository::new(state.pool())
        .create(&fields)
        .await
        .map_err(|e| StoreFailure::new(Action::Post, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Post, ENTITY, user)))
}

/// `PUT /users/{id}` - full overwrite; a missing id is a silent no-op.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(fields): Json<UserFields>,
) -> Result<Json<ActionEnvelope<User>>, StoreFailure> {
    let changed = UserRepository::new(state.pool())
        .update(id, &fields)
        .await
        .map_err(|e| StoreFailure::new(Action::Put, ENTITY, e))?;

    if changed == 0 {
        tracing::debug!(%id, "Update matched no rows");
    }

    Ok(Json(ActionEnvelope::ok(
        Action::Put,
        ENTITY,
        fields.into_user(id),
    )))
}

/// Body of a delete response: just the id that was targeted.
#[derive(Debug, Serialize)]
struct DeletedUser {
    #[serde(rename = "UserId")]
    user_id: UserId,
}

/// `DELETE /users/{id}` - a missing id is a silent no-op.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<ActionEnvelope<DeletedUser>>, StoreFailure> {
    let changed = UserRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| StoreFailure::new(Action::Delete, ENTITY, e))?;

    if changed == 0 {
        tracing::debug!(%id, "Delete matched no rows");
    }

    Ok(Json(ActionEnvelope::ok(
        Action::Delete,
        ENTITY,
        DeletedUser { user_id: id },
    )))
}
