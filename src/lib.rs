//! Product catalog: CRUD REST backend with a server-rendered listing page.

pub mod error;
pub mod handlers;
pub mod model;
pub mod render;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::{AppError, SetupError};
pub use model::{NewProduct, Product};
pub use render::Templates;
pub use routes::app;
pub use service::CatalogService;
pub use state::AppState;
pub use store::{connect, ensure_products_table};
