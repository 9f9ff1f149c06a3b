//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Host harness configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Menu settings file, YAML or JSON (required).
    pub settings_path: PathBuf,

    /// Viewer context JSON file. When None, the viewer is anonymous.
    pub viewer_path: Option<PathBuf>,

    /// Subfolder the site is served from (default: empty).
    pub base_path: String,

    /// YAML translation table. When None, labels fall back to their keys.
    pub translations_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let settings_path = env::var("MENU_SETTINGS")
            .map(PathBuf::from)
            .context("MENU_SETTINGS environment variable is required")?;

        let viewer_path = env::var("MENU_VIEWER").ok().map(PathBuf::from);

        let base_path = env::var("MENU_BASE_PATH").unwrap_or_default();

        let translations_path = env::var("MENU_TRANSLATIONS").ok().map(PathBuf::from);

        Ok(Self {
            settings_path,
            viewer_path,
            base_path,
            translations_path,
        })
    }
}
