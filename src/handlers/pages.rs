//! Server-rendered pages.

use crate::error::AppError;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, response::Html};

/// Listing page: same read as GET /products, rendered as HTML.
pub async fn product_list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = CatalogService::list(&state.pool).await?;
    Ok(Html(state.templates.render_products(&products)))
}
