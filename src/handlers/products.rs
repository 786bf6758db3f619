//! Product CRUD handlers: create, list, update, delete.

use crate::error::AppError;
use crate::model::Product;
use crate::service::{validate_product_input, CatalogService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let input = validate_product_input(&body)?;
    let product = CatalogService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = CatalogService::list(&state.pool).await?;
    Ok(Json(products))
}

/// Full overwrite of one product. The body is validated before the existence
/// check, so a malformed body on a missing id reports 422, not 404.
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Product>, AppError> {
    let input = validate_product_input(&body)?;
    let product = CatalogService::update(&state.pool, product_id, &input)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    if !CatalogService::delete(&state.pool, product_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(DeleteConfirmation {
        message: "Product deleted",
    }))
}
