pub mod catalog;
pub mod validation;

pub use catalog::CatalogService;
pub use validation::validate_product_input;
