use std::io;

use thiserror::Error;

/// Semantic validation failure: the config file was read and parsed, but the
/// declared values violate a rule. Each variant names the offending key and
/// value(s) so startup logs can say exactly what to fix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key is absent from the config file.
    #[error("Missing required config key '{0}'")]
    MissingKey(&'static str),

    /// A required key is present but blank.
    #[error("Config key '{0}' must not be empty")]
    EmptyField(&'static str),

    /// image_root is not an absolute path.
    #[error("image_root must be an absolute path, got '{0}'")]
    RelativeImageRoot(String),

    /// url_prefix does not parse as a URL.
    #[error("url_prefix '{value}' is not a valid URL: {reason}")]
    InvalidUrlPrefix { value: String, reason: String },

    /// url_prefix parses but has no host component.
    #[error("url_prefix '{0}' must have a host")]
    UrlPrefixWithoutHost(String),

    /// A data source id is not a usable token.
    #[error("Invalid data source id '{0}': must be a non-empty token without whitespace")]
    InvalidDataSourceId(String),

    /// The same data source id appears more than once.
    #[error("Duplicate data source id '{0}'")]
    DuplicateDataSourceId(String),

    /// The parallel resolution lists cannot be paired up.
    #[error(
        "resolution_directories has {directories} entries but resolution_titles has {titles}"
    )]
    ResolutionCountMismatch { directories: usize, titles: usize },

    /// A resolution directory or title entry is blank.
    #[error("Resolution entry {index} has a blank {field}")]
    BlankResolutionEntry { field: &'static str, index: usize },

    /// Two resolution tiers share a storage directory.
    #[error("Duplicate resolution directory '{0}'")]
    DuplicateResolutionDirectory(String),
}

/// Crate-wide error type for imgcatalog operations.
///
/// `Io`, `ConfigMissing`, and `Toml` mean the source could not be read or
/// parsed; `Config` means it was read but failed validation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure while reading the config source.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Config source does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Config source is not syntactically valid TOML.
    #[error("Malformed config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config parsed but failed semantic validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
