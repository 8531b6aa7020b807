//! Catalog configuration domain models.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use url::Url;

use super::error::ConfigError;

/// A validated data source identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains no whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DataSourceId(String);

impl DataSourceId {
    /// Validate and wrap a raw token.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidDataSourceId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataSourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DataSourceId> for String {
    fn from(val: DataSourceId) -> Self {
        val.0
    }
}

/// One output rendition tier of an image asset: the storage subdirectory it
/// lives in and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Storage subdirectory name (e.g. a pixel-width bucket like "620").
    pub directory: String,
    /// Human-readable label (e.g. "Small: 620px").
    pub title: String,
}

/// Validated, immutable serving configuration for the imagery catalog.
///
/// Built once at startup by [`crate::load`]; never mutated afterwards, so a
/// single value can be shared freely across threads. Consumers receive it by
/// argument rather than through any global.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogConfig {
    /// Absolute filesystem root under which imagery is stored.
    pub image_root: PathBuf,
    /// Public base URL for served imagery. Always ends with `/` so relative
    /// asset paths can be joined onto it directly.
    pub url_prefix: Url,
    /// Data sources whose imagery is served, in declaration order.
    pub data_source_ids: Vec<DataSourceId>,
    /// Resolution tiers in declaration order.
    pub resolutions: Vec<Resolution>,
}

impl CatalogConfig {
    /// Display title for a resolution directory, if one is configured.
    pub fn title_for(&self, directory: &str) -> Option<&str> {
        self.resolutions
            .iter()
            .find(|r| r.directory == directory)
            .map(|r| r.title.as_str())
    }
}

/// Check `data_source_ids` for duplicates, reporting the first repeated value.
pub(crate) fn check_unique_data_sources(ids: &[DataSourceId]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(ConfigError::DuplicateDataSourceId(id.as_str().to_string()));
        }
    }
    Ok(())
}

/// Check resolution tiers for duplicate storage directories.
pub(crate) fn check_unique_resolution_dirs(resolutions: &[Resolution]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for res in resolutions {
        if !seen.insert(res.directory.as_str()) {
            return Err(ConfigError::DuplicateResolutionDirectory(res.directory.clone()));
        }
    }
    Ok(())
}
