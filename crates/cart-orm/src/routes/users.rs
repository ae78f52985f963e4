//! User CRUD handlers, ORM edition.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use shoplab_core::{Action, ActionEnvelope};

use crate::entities::user::{self, ENTITY};
use crate::error::RequestError;
use crate::state::AppState;

/// Build the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
}

/// The client-supplied fields of a user (everything but the id).
#[derive(Debug, Clone, Deserialize)]
struct UserFields {
    #[serde(rename = "FullName")]
    full_name: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "RegistrationDate")]
    registration_date: NaiveDate,
}

/// `GET /users` - all users in insertion order.
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ActionEnvelope<Vec<user::Model>>>, RequestError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::UserId)
        .all(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Get, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Get, ENTITY, users)))
}

/// `POST /users` - insert and echo the row with its generated id.
async fn create_user(
    State(state): State<AppState>,
    Json(fields): Json<UserFields>,
) -> Result<Json<ActionEnvelope<user::Model>>, RequestError> {
    let user = user::ActiveModel {
        full_name: Set(fields.full_name),
        address: Set(fields.address),
        registration_date: Set(fields.registration_date),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(|e| RequestError::store(Action::Post, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Post, ENTITY, user)))
}

/// `PUT /users/{id}` - full overwrite; 404 when the id does not exist.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(fields): Json<UserFields>,
) -> Result<Json<ActionEnvelope<user::Model>>, RequestError> {
    let Some(existing) = user::Entity::find_by_id(id)
        .one(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Put, ENTITY, e))?
    else {
        return Err(RequestError::not_found(Action::Put, ENTITY));
    };

    let mut user: user::ActiveModel = existing.into();
    user.full_name = Set(fields.full_name);
    user.address = Set(fields.address);
    user.registration_date = Set(fields.registration_date);

    let updated = user
        .update(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Put, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Put, ENTITY, updated)))
}

/// Body of a delete response: just the id that was removed.
#[derive(Debug, Serialize)]
struct DeletedUser {
    #[serde(rename = "UserId")]
    user_id: i32,
}

/// `DELETE /users/{id}` - 404 when the id does not exist.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionEnvelope<DeletedUser>>, RequestError> {
    let Some(existing) = user::Entity::find_by_id(id)
        .one(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Delete, ENTITY, e))?
    else {
        return Err(RequestError::not_found(Action::Delete, ENTITY));
    };

    existing
        .delete(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Delete, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(
        Action::Delete,
        ENTITY,
        DeletedUser { user_id: id },
    )))
}
