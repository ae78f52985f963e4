//! Shopping-cart CRUD handlers, ORM edition.
//!
//! A POST or PUT referencing a nonexistent user or product is rejected by
//! the store's foreign keys and surfaces as a 500 with the constraint text
//! in the envelope's `error` field.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use shoplab_core::{Action, ActionEnvelope};

use crate::entities::shopping_cart::{self, ENTITY};
use crate::error::RequestError;
use crate::state::AppState;

/// Build the shopping-cart router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shoppingcarts", get(list_carts).post(create_cart))
        .route("/shoppingcarts/{id}", put(update_cart).delete(delete_cart))
}

/// The client-supplied fields of a cart row (everything but the id).
#[derive(Debug, Clone, Deserialize)]
struct CartFields {
    #[serde(rename = "UserId")]
    user_id: i32,
    #[serde(rename = "ProductId")]
    product_id: i32,
    #[serde(rename = "Quantity")]
    quantity: i32,
}

/// `GET /shoppingcarts` - all cart rows in insertion order.
async fn list_carts(
    State(state): State<AppState>,
) -> Result<Json<ActionEnvelope<Vec<shopping_cart::Model>>>, RequestError> {
    let carts = shopping_cart::Entity::find()
        .order_by_asc(shopping_cart::Column::CartId)
        .all(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Get, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Get, ENTITY, carts)))
}

/// `POST /shoppingcarts` - insert and echo the row with its generated id.
async fn create_cart(
    State(state): State<AppState>,
    Json(fields): Json<CartFields>,
) -> Result<Json<ActionEnvelope<shopping_cart::Model>>, RequestError> {
    let cart = shopping_cart::ActiveModel {
        user_id: Set(fields.user_id),
        product_id: Set(fields.product_id),
        quantity: Set(fields.quantity),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(|e| RequestError::store(Action::Post, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Post, ENTITY, cart)))
}

/// `PUT /shoppingcarts/{id}` - full overwrite; 404 when the id does not exist.
async fn update_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(fields): Json<CartFields>,
) -> Result<Json<ActionEnvelope<shopping_cart::Model>>, RequestError> {
    let Some(existing) = shopping_cart::Entity::find_by_id(id)
        .one(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Put, ENTITY, e))?
    else {
        return Err(RequestError::not_found(Action::Put, ENTITY));
    };

    let mut cart: shopping_cart::ActiveModel = existing.into();
    cart.user_id = Set(fields.user_id);
    cart.product_id = Set(fields.product_id);
    cart.quantity = Set(fields.quantity);

    let updated = cart
        .update(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Put, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Put, ENTITY, updated)))
}

/// Body of a delete response: just the id that was removed.
#[derive(Debug, Serialize)]
struct DeletedCart {
    #[serde(rename = "CartId")]
    cart_id: i32,
}

/// `DELETE /shoppingcarts/{id}` - 404 when the id does not exist.
async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionEnvelope<DeletedCart>>, RequestError> {
    let Some(existing) = shopping_cart::Entity::find_by_id(id)
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
        DeletedCart { cart_id: id },
    )))
}
