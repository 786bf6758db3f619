//! Pool construction and products table bootstrap.

use crate::error::SetupError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open the pool for `database_url`, creating the database file if it does not
/// exist yet. Call once at process start.
pub async fn connect(database_url: &str) -> Result<SqlitePool, SetupError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| SetupError::DatabaseUrl(e.to_string()))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Idempotent DDL for the products table. Run before serving.
pub async fn ensure_products_table(pool: &SqlitePool) -> Result<(), SetupError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
