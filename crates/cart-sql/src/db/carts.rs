//! Shopping-cart repository for database operations.
//!
//! Referential integrity is the store's job: inserting or updating a row
//! whose user or product does not exist fails with a foreign-key violation,
//! which the route layer surfaces verbatim as a store error.

use sqlx::PgPool;

use shoplab_core::CartId;

use crate::models::{CartFields, ShoppingCart};

/// Repository for shopping-cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All cart rows, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn list(&self) -> Result<Vec<ShoppingCart>, sqlx::Error> {
        sqlx::query_as::<_, ShoppingCart>(
            r"
            SELECT cart_id, user_id, product_id, quantity
            FROM shopping_carts
            ORDER BY cart_id
            ",
        )
        .fetch_all(self.pool)
        .await
    }

    /// Insert a cart row, returning the full row with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the insert fails, including a foreign-key
    /// violation for a dangling user or product reference.
    pub async fn create(&self, fields: &CartFields) -> Result<ShoppingCart, sqlx::Error> {
        sqlx::query_as::<_, ShoppingCart>(
            r"
            INSERT INTO shopping_carts (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING cart_id, user_id, product_id, quantity
            ",
        )
        .bind(fields.user_id)
        .bind(fields.product_id)
        .bind(fields.quantity)
        .fetch_one(self.pool)
        .await
    }

    /// Unconditionally overwrite all non-identifier fields.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the update fails.
    pub async fn update(&self, id: CartId, fields: &CartFields) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            UPDATE shopping_carts
            SET user_id = $1, product_id = $2, quantity = $3
            WHERE cart_id = $4
            ",
        )
        .bind(fields.user_id)
        .bind(fields.product_id)
        .bind(fields.quantity)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a cart row by id. Zero rows affected is not an error here.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the delete fails.
    pub async fn delete(&self, id: CartId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shopping_carts WHERE cart_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
