//! Router assembly: one router per concern, merged into the app.

use crate::handlers::{health, pages, products};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};
use std::path::PathBuf;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// JSON CRUD surface: POST/GET /products, PUT/DELETE /products/:product_id.
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:product_id",
            put(products::update).delete(products::delete),
        )
        .with_state(state)
}

/// Server-rendered pages: GET /.
pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::product_list))
        .with_state(state)
}

/// Probes: GET /health, GET /ready (with DB ping).
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state)
}

/// Full application: all routes, static assets under /static, tracing and
/// permissive CORS layers.
pub fn app(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .merge(page_routes(state.clone()))
        .merge(product_routes(state.clone()))
        .merge(health_routes(state))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
