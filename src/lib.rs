//! imgcatalog: load and validate imagery catalog serving configuration.
//!
//! The configuration declares where rendered imagery lives on disk, the
//! public URL it is served under, which data sources are published, and the
//! resolution tiers each asset is rendered at. It is loaded once at startup
//! into an immutable [`CatalogConfig`] that consumers receive by argument.
//!
//! ```toml
//! image_root = "/var/www/Images"
//! url_prefix = "http://example.org/Images/"
//! data_source_ids = ["oisst-daily-cdr", "usdroughtmonitor-weekly-ndmc"]
//! resolution_directories = ["620", "1000", "hd"]
//! resolution_titles = ["Small: 620px", "Large: 1000px", "High Definition: 1920px"]
//! ```

pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use ports::ConfigSource;
use services::FilesystemSource;

pub use domain::{
    AppError, CatalogConfig, ConfigError, DataSourceId, Resolution, parse_catalog_content,
};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "imgcatalog.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "IMGCATALOG_CONFIG";

/// Load the catalog configuration from the default location.
///
/// Reads `$IMGCATALOG_CONFIG` if set, otherwise `imgcatalog.toml` in the
/// current directory.
pub fn load() -> Result<CatalogConfig, AppError> {
    load_from(&default_config_path())
}

/// Load the catalog configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<CatalogConfig, AppError> {
    load_from_source(&FilesystemSource::new(path))
}

/// Load the catalog configuration from any [`ConfigSource`].
pub fn load_from_source<S: ConfigSource>(source: &S) -> Result<CatalogConfig, AppError> {
    domain::load_catalog(source)
}

/// Resolve the config file path: env override first, then the default name.
pub fn default_config_path() -> PathBuf {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(CONFIG_FILE),
    }
}
