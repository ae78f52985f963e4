//! HTTP route handlers for the raw-driver cart service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Health check
//!
//! # Users
//! GET    /users                 - List users
//! POST   /users                 - Create user
//! PUT    /users/{id}            - Overwrite user (silent no-op if missing)
//! DELETE /users/{id}            - Delete user (silent no-op if missing)
//!
//! # Products
//! GET    /products              - List products
//! POST   /products              - Create product
//! PUT    /products/{id}         - Overwrite product
//! DELETE /products/{id}         - Delete product
//!
//! # Shopping carts
//! GET    /shoppingcarts         - List cart rows
//! POST   /shoppingcarts         - Create cart row (store checks FKs)
//! PUT    /shoppingcarts/{id}    - Overwrite cart row
//! DELETE /shoppingcarts/{id}    - Delete cart row
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
