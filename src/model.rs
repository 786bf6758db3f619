//! Product entity and validated input record.

use serde::{Deserialize, Serialize};

/// A persisted product row. The JSON output shape is exactly these four fields.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Validated creation record. Update uses the same shape: every field is
/// required and overwritten unconditionally (no partial updates).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}
