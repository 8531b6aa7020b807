//! Catalog configuration loading and validation.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::catalog::{check_unique_data_sources, check_unique_resolution_dirs};
use crate::domain::{AppError, CatalogConfig, ConfigError, DataSourceId, Resolution};
use crate::ports::ConfigSource;

/// Raw file shape. Every key is optional here so a missing one can be
/// reported as a validation error naming the key instead of a parse error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDto {
    image_root: Option<String>,
    url_prefix: Option<String>,
    data_source_ids: Option<Vec<String>>,
    resolution_directories: Option<Vec<String>>,
    resolution_titles: Option<Vec<String>>,
}

/// Load and validate the catalog configuration from a source.
pub fn load_catalog<S: ConfigSource>(source: &S) -> Result<CatalogConfig, AppError> {
    if !source.exists() {
        return Err(AppError::ConfigMissing(source.describe()));
    }
    let content = source.read()?;
    parse_catalog_content(&content)
}

/// Parse and validate catalog configuration from TOML content.
///
/// Pure: same content always yields the same result.
pub fn parse_catalog_content(content: &str) -> Result<CatalogConfig, AppError> {
    let dto: CatalogDto = toml::from_str(content)?;
    Ok(validate(dto)?)
}

fn validate(dto: CatalogDto) -> Result<CatalogConfig, ConfigError> {
    let image_root = validate_image_root(dto.image_root)?;
    let url_prefix = validate_url_prefix(dto.url_prefix)?;

    let raw_ids = dto.data_source_ids.ok_or(ConfigError::MissingKey("data_source_ids"))?;
    if raw_ids.is_empty() {
        return Err(ConfigError::EmptyField("data_source_ids"));
    }
    let data_source_ids = raw_ids
        .iter()
        .map(|raw| DataSourceId::new(raw))
        .collect::<Result<Vec<_>, _>>()?;
    check_unique_data_sources(&data_source_ids)?;

    let directories =
        dto.resolution_directories.ok_or(ConfigError::MissingKey("resolution_directories"))?;
    let titles = dto.resolution_titles.ok_or(ConfigError::MissingKey("resolution_titles"))?;
    let resolutions = pair_resolutions(directories, titles)?;

    Ok(CatalogConfig { image_root, url_prefix, data_source_ids, resolutions })
}

fn validate_image_root(raw: Option<String>) -> Result<PathBuf, ConfigError> {
    let raw = raw.ok_or(ConfigError::MissingKey("image_root"))?;
    if raw.trim().is_empty() {
        return Err(ConfigError::EmptyField("image_root"));
    }
    let path = PathBuf::from(&raw);
    if !path.is_absolute() {
        return Err(ConfigError::RelativeImageRoot(raw));
    }
    Ok(path)
}

fn validate_url_prefix(raw: Option<String>) -> Result<Url, ConfigError> {
    let raw = raw.ok_or(ConfigError::MissingKey("url_prefix"))?;
    if raw.trim().is_empty() {
        return Err(ConfigError::EmptyField("url_prefix"));
    }
    let mut url = Url::parse(&raw).map_err(|err| ConfigError::InvalidUrlPrefix {
        value: raw.clone(),
        reason: err.to_string(),
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::UrlPrefixWithoutHost(raw));
    }
    // Url::join drops the final path segment of a base without a trailing
    // slash, so normalize here once instead of in every consumer.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Zip the parallel directory/title lists into explicit pairs.
///
/// The parallel lists are the file format; after this point only the paired
/// form exists, so a tier's directory and title cannot drift apart by index.
fn pair_resolutions(
    directories: Vec<String>,
    titles: Vec<String>,
) -> Result<Vec<Resolution>, ConfigError> {
    if directories.len() != titles.len() {
        return Err(ConfigError::ResolutionCountMismatch {
            directories: directories.len(),
            titles: titles.len(),
        });
    }
    if directories.is_empty() {
        return Err(ConfigError::EmptyField("resolution_directories"));
    }

    let resolutions: Vec<Resolution> = directories
        .into_iter()
        .zip(titles)
        .map(|(directory, title)| Resolution { directory, title })
        .collect();

    for (index, res) in resolutions.iter().enumerate() {
        if res.directory.trim().is_empty() {
            return Err(ConfigError::BlankResolutionEntry { field: "directory", index });
        }
        if res.title.trim().is_empty() {
            return Err(ConfigError::BlankResolutionEntry { field: "title", index });
        }
    }
    check_unique_resolution_dirs(&resolutions)?;
    Ok(resolutions)
}
