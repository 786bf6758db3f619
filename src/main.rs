//! Server binary: env config, store bootstrap, template load, serve.

use product_catalog::{app, connect, ensure_products_table, AppState, Templates};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("product_catalog=info".parse()?),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://catalog.db".into());
    let pool = connect(&database_url).await?;
    ensure_products_table(&pool).await?;

    let templates_dir = std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".into());
    let templates = Templates::load(&templates_dir)?;
    let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));

    let state = AppState {
        pool,
        templates: Arc::new(templates),
    };
    let app = app(state, static_dir);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
