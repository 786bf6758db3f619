//! CRUD execution against the products table.
//!
//! Each operation is a single statement on a pooled connection; the connection
//! is checked out for that statement only and released unconditionally. No
//! locking or ordering guarantee exists across concurrent writes to one id.

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use sqlx::SqlitePool;

pub struct CatalogService;

impl CatalogService {
    /// Insert one row; the store assigns the id. Returns the created row.
    pub async fn create(pool: &SqlitePool, input: &NewProduct) -> Result<Product, AppError> {
        tracing::debug!(name = %input.name, "insert product");
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, description) VALUES (?, ?, ?) \
             RETURNING id, name, price, description",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;
        Ok(product)
    }

    /// All rows in the store's natural (rowid) order. Empty store → empty vec.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, AppError> {
        tracing::debug!("list products");
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, price, description FROM products")
                .fetch_all(pool)
                .await?;
        Ok(products)
    }

    /// Overwrite all three non-id fields of the row with `id`. Returns `None`
    /// when the id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        input: &NewProduct,
    ) -> Result<Option<Product>, AppError> {
        tracing::debug!(id, "update product");
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = ?, price = ?, description = ? WHERE id = ? \
             RETURNING id, name, price, description",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(product)
    }

    /// Remove the row with `id` permanently. Returns `false` when the id does
    /// not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete product");
        let deleted = sqlx::query("DELETE FROM products WHERE id = ? RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted.is_some())
    }
}
