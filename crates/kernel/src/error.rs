//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading menu settings.
///
/// A malformed section or link record (for example a section without a
/// `title`) surfaces here rather than being skipped.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported settings format: {0} (expected .yml, .yaml, or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias using SettingsError.
pub type SettingsResult<T> = Result<T, SettingsError>;
