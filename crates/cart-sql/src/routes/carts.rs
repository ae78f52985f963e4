//! Shopping-cart CRUD handlers.
//!
//! A POST or PUT referencing a nonexistent user or product is rejected by
//! the store's foreign keys and surfaces as a 500 with the constraint text
//! in the envelope's `error` field.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::Serialize;

use shoplab_core::{Action, ActionEnvelope, CartId};

use crate::db::CartRepository;
use crate::error::StoreFailure;
use crate::models::cart::{CartFields, ENTITY, ShoppingCart};
use crate::state::AppState;

/// Build the shopping-cart router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shoppingcarts", get(list_carts).post(create_cart))
        .route("/shoppingcarts/{id}", put(update_cart).delete(delete_cart))
}

/// `GET /shoppingcarts` - all cart rows in insertion order.
async fn list_carts(
    State(state): State<AppState>,
) -> Result<Json<ActionEnvelope<Vec<ShoppingCart>>>, StoreFailure> {
    let carts = CartRepository::new(state.pool())
        .list()
        .await
        .map_err(|e| StoreFailure::new(Action::Get, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Get, ENTITY, carts)))
}

/// `POST /shoppingcarts` - insert and echo the row with its generated id.
async fn create_cart(
    State(state): State<AppState>,
    Json(fields): Json<CartFields>,
) -> Result<Json<ActionEnvelope<ShoppingCart>>, StoreFailure> {
    let cart = CartRepository::new(state.pool())
        .create(&fields)
        .await
        .map_err(|e| StoreFailure::new(Action::Post, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Post, ENTITY, cart)))
}

/// `PUT /shoppingcarts/{id}` - full overwrite; a missing id is a silent no-op.
async fn update_cart(
    State(state): State<AppState>,
    Path(id): Path<CartId>,
    Json(fields): Json<CartFields>,
) -> Result<Json<ActionEnvelope<ShoppingCart>>, StoreFailure> {
    let changed = CartRepository::new(state.pool())
        .update(id, &fields)
        .await
        .map_err(|e| StoreFailure::new(Action::Put, ENTITY, e))?;

    if changed == 0 {
        tracing::debug!(%id, "Update matched no rows");
    }

    Ok(Json(ActionEnvelope::ok(
        Action::Put,
        ENTITY,
        fields.into_cart(id),
    )))
}

/// Body of a delete response: just the id that was targeted.
#[derive(Debug, Serialize)]
struct DeletedCart {
    #[serde(rename = "CartId")]
    cart_id: CartId,
}

/// `DELETE /shoppingcarts/{id}` - a missing id is a silent no-op.
async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<CartId>,
) -> Result<Json<ActionEnvelope<DeletedCart>>, StoreFailure> {
    let changed = CartRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| StoreFailure::new(Action::Delete, ENTITY, e))?;

    if changed == 0 {
        tracing::debug!(%id, "Delete matched no rows");
    }

    Ok(Json(ActionEnvelope::ok(
        Action::Delete,
        ENTITY,
        DeletedCart { cart_id: id },
    )))
}
