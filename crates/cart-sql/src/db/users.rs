//! User repository for database operations.

use sqlx::PgPool;

use shoplab_core::UserId;

use crate::models::{User, UserFields};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All users, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r"
            SELECT user_id, full_name, address, registration_date
            FROM users
            ORDER BY user_id
            ",
        )
        .fetch_all(self.pool)
        .await
    }

    /// Insert a user, returning the full row with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the insert fails.
    pub async fn create(&self, fields: &UserFields) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (full_name, address, registration_date)
            VALUES ($1, $2, $3)
            RETURNING user_id, full_name, address, registration_date
            ",
        )
        .bind(&fields.full_name)
        .bind(&fields.address)
        .bind(fields.registration_date)
        .fetch_one(self.pool)
        .await
    }

    /// Unconditionally overwrite all non-identifier fields.
    ///
    /// Returns the number of rows changed; zero means the id did not
    /// exist, which this variant does not treat as an error.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the update fails.
    pub async fn update(&self, id: UserId, fields: &UserFields) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET full_name = $1, address = $2, registration_date = $3
            WHERE user_id = $4
            ",
        )
        .bind(&fields.full_name)
        .bind(&fields.address)
        .bind(fields.registration_date)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a user by id. Zero rows affected is not an error here.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the delete fails (including a foreign-key
    /// violation from a referencing cart row).
    pub async fn delete(&self, id: UserId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
