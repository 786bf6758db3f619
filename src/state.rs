//! Shared application state for all routes.

use crate::render::Templates;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Loaded once at startup; a missing template file fails boot, not a request.
    pub templates: Arc<Templates>,
}
