//! Product CRUD handlers, ORM edition.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use shoplab_core::{Action, ActionEnvelope};

use crate::entities::product::{self, ENTITY};
use crate::error::RequestError;
use crate::state::AppState;

/// Build the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
}

/// The client-supplied fields of a product (everything but the id).
#[derive(Debug, Clone, Deserialize)]
struct ProductFields {
    #[serde(rename = "ProductName")]
    product_name: String,
    #[serde(rename = "Price")]
    price: Decimal,
    #[serde(rename = "ManufacturingDate")]
    manufacturing_date: NaiveDate,
}

/// `GET /products` - all products in insertion order.
async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ActionEnvelope<Vec<product::Model>>>, RequestError> {
    let products = product::Entity::find()
        .order_by_asc(product::Column::ProductId)
        .all(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Get, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Get, ENTITY, products)))
}

/// `POST /products` - insert and echo the row with its generated id.
async fn create_product(
    State(state): State<AppState>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<ActionEnvelope<product::Model>>, RequestError> {
    let product = product::ActiveModel {
        product_name: Set(fields.product_name),
        price: Set(fields.price),
        manufacturing_date: Set(fields.manufacturing_date),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(|e| RequestError::store(Action::Post, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Post, ENTITY, product)))
}

/// `PUT /products/{id}` - full overwrite; 404 when the id does not exist.
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<ActionEnvelope<product::Model>>, RequestError> {
    let Some(existing) = product::Entity::find_by_id(id)
        .one(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Put, ENTITY, e))?
    else {
        return Err(RequestError::not_found(Action::Put, ENTITY));
    };

    let mut product: product::ActiveModel = existing.into();
    product.product_name = Set(fields.product_name);
    product.price = Set(fields.price);
    product.manufacturing_date = Set(fields.manufacturing_date);

    let updated = product
        .update(state.db())
        .await
        .map_err(|e| RequestError::store(Action::Put, ENTITY, e))?;

    Ok(Json(ActionEnvelope::ok(Action::Put, ENTITY, updated)))
}

/// Body of a delete response: just the id that was removed.
#[derive(Debug, Serialize)]
struct DeletedProduct {
    #[serde(rename = "ProductId")]
    product_id: i32,
}

/// `DELETE /products/{id}` - 404 when the id does not exist.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionEnvelope<DeletedProduct>>, RequestError> {
    let Some(existing) = product::Entity::find_by_id(id)
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
        DeletedProduct { product_id: id },
    )))
}
