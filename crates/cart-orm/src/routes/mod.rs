//! HTTP route handlers for the ORM cart service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Health check
//!
//! # Users
//! GET    /users                 - List users
//! POST   /users                 - Create user
//! PUT    /users/{id}            - Overwrite user (404 if missing)
//! DELETE /users/{id}            - Delete user (404 if missing)
//!
//! # Products
//! GET    /products              - List products
//! POST   /products              - Create product
//! PUT    /products/{id}         - Overwrite product (404 if missing)
//! DELETE /products/{id}         - Delete product (404 if missing)
//!
//! # Shopping carts
//! GET    /shoppingcarts         - List cart rows
//! POST   /shoppingcarts         - Create cart row (store checks FKs)
//! PUT    /shoppingcarts/{id}    - Overwrite cart row (404 if missing)
//! DELETE /shoppingcarts/{id}    - Delete cart row (404 if missing)
//! ```
//!
//! Every response uses the `{action, status, <Entity>, error?}` envelope.

pub mod carts;
pub mod products;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the complete route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(products::router())
        .merge(carts::router())
}
