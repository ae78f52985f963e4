//! Product repository for database operations.

use sqlx::PgPool;

use shoplab_core::ProductId;

use crate::models::{Product, ProductFields};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r"
            SELECT product_id, product_name, price, manufacturing_date
            FROM products
            ORDER BY product_id
            ",
        )
        .fetch_all(self.pool)
        .await
    }

    /// Insert a product, returning the full row with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the insert fails.
    pub async fn create(&self, fields: &ProductFields) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (product_name, price, manufacturing_date)
            VALUES ($1, $2, $3)
            RETURNING product_id, product_name, price, manufacturing_date
            ",
        )
        .bind(&fields.product_name)
        .bind(fields.price)
        .bind(fields.manufacturing_date)
        .fetch_one(self.pool)
        .await
    }

    /// Unconditionally overwrite all non-identifier fields.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the update fails.
    pub async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET product_name = $1, price = $2, manufacturing_date = $3
            WHERE product_id = $4
            ",
        )
        .bind(&fields.product_name)
        .bind(fields.price)
        .bind(fields.manufacturing_date)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a product by id. Zero rows affected is not an error here.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
