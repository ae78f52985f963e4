//! Database access for the raw-driver cart service.
//!
//! # Tables
//!
//! - `users` - `{user_id, full_name, address, registration_date}`
//! - `products` - `{product_id, product_name, price, manufacturing_date}`
//! - `shopping_carts` - `{cart_id, user_id, product_id, quantity}` with
//!   foreign keys to `users` and `products`
//!
//! The schema is created on startup with `CREATE TABLE IF NOT EXISTS`; see
//! [`init_schema`]. All queries are runtime-checked `sqlx::query_as` /
//! `sqlx::query` calls, so no live database is needed to compile.

pub mod carts;
pub mod products;
pub mod users;

pub use carts::CartRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// DDL statements issued once at startup, in dependency order.
const SCHEMA: [&str; 3] = [
    r"
    CREATE TABLE IF NOT EXISTS users (
        user_id SERIAL PRIMARY KEY,
        full_name TEXT NOT NULL,
        address TEXT NOT NULL,
        registration_date DATE NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS products (
        product_id SERIAL PRIMARY KEY,
        product_name TEXT NOT NULL,
        price NUMERIC(10, 2) NOT NULL,
        manufacturing_date DATE NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS shopping_carts (
        cart_id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users (user_id),
        product_id INTEGER NOT NULL REFERENCES products (product_id),
        quantity INTEGER NOT NULL
    )
    ",
];

/// Idempotently create the three tables.
///
/// Runs before the listener binds. The caller logs a failure instead of
/// aborting, so a broken store only surfaces at request time.
///
/// # Errors
///
/// Returns the first `sqlx::Error` encountered.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_both_foreign_keys() {
        let carts_ddl = SCHEMA[2];
        assert!(carts_ddl.contains("REFERENCES users (user_id)"));
        assert!(carts_ddl.contains("REFERENCES products (product_id)"));
    }

    #[test]
    fn test_schema_is_idempotent() {
        for ddl in SCHEMA {
            assert!(ddl.contains("IF NOT EXISTS"));
        }
    }
}
