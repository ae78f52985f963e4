//! ORM connection and startup schema initialization.

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use secrecy::ExposeSecret;

use crate::entities::{product, shopping_cart, user};

/// Open the single long-lived database connection.
///
/// # Errors
///
/// Returns `DbErr` if the connection cannot be established.
pub async fn connect(database_url: &secrecy::SecretString) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url.expose_secret()).await
}

/// Idempotently create the three tables from the entity definitions.
///
/// The shopping-cart table goes last so its foreign keys can reference
/// the other two. The caller logs a failure instead of aborting startup.
///
/// # Errors
///
/// Returns the first `DbErr` encountered.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, schema.create_table_from_entity(user::Entity)).await?;
    create_table(db, schema.create_table_from_entity(product::Entity)).await?;
    create_table(db, schema.create_table_from_entity(shopping_cart::Entity)).await?;

    Ok(())
}

/// Execute one `CREATE TABLE IF NOT EXISTS` statement.
async fn create_table(
    db: &DatabaseConnection,
    mut stmt: TableCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();
    db.execute(db.get_database_backend().build(&stmt)).await?;
    Ok(())
}
