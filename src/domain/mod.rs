pub mod catalog;
pub mod error;
pub mod loader;

pub use catalog::{CatalogConfig, DataSourceId, Resolution};
pub use error::{AppError, ConfigError};
pub use loader::{load_catalog, parse_catalog_content};
