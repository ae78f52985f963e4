//! Product CRUD handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::Serialize;

use shoplab_core::{Action, ActionEnvelope, ProductId};

use crate::db::ProductRepository;
use crate::error::StoreFailure;
use crate::models::product::{ENTITY, Product, ProductFields};
use crate::state::AppState;

/// Build the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
}

/// `GET /products` - all products in insertion order.
async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ActionEnvelope<Vec<Product>>>, StoreFailure> {
    let products = ProductRepository::new(state.pool())
        .list()
        .await
        .map_err(|e| StoreFailure::new(Action::Get, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Get, ENTITY, products)))
}

/// `POST /products` - insert and echo the row with its generated id.
async fn create_product(
    State(state): State<AppState>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<ActionEnvelope<Product>>, StoreFailure> {
    let product = ProductRepository::new(state.pool())
        .create(&fields)
        .await
        .map_err(|e| StoreFailure::new(Action::Post, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Post, ENTITY, product)))
}

/// `PUT /products/{id}` - full overwrite; a missing id is a silent no-op.
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<ActionEnvelope<Product>>, StoreFailure> {
    let changed = ProductRepository::new(state.pool())
        .update(id, &fields)
        .await
        .map_err(|e| StoreFailure::new(Action::Put, ENTITY, e))?;

    if changed == 0 {
        tracing::debug!(%id, "Update matched no rows");
    }

    Ok(Json(ActionEnvelope::ok(
        Action::Put,
        ENTITY,
        fields.into_product(id),
    )))
}

/// Body of a delete response: just the id that was targeted.
#[derive(Debug, Serialize)]
struct DeletedProduct {
    #[serde(rename = "ProductId")]
    product_id: ProductId,
}

/// `DELETE /products/{id}` - a missing id is a silent no-op.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ActionEnvelope<DeletedProduct>>, StoreFailure> {
    let changed = ProductRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| StoreFailure::new(Action::Delete, ENTITY, e))?;

    if changed == 0 {
        tracing::debug!(%id, "Delete matched no rows");
    }

    Ok(Json(ActionEnvelope::ok(
        Action::Delete,
        ENTITY,
        DeletedProduct { product_id: id },
    )))
}
