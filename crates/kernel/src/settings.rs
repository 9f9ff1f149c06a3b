//! Loading menu settings from YAML or JSON.
//!
//! Theme settings arrive either as the YAML the component ships with or as
//! the JSON the host serializes for the browser. Both carry the same
//! `menu_sections` list.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};
use crate::models::MenuSettings;

/// Parse settings from YAML text.
pub fn from_yaml_str(text: &str) -> SettingsResult<MenuSettings> {
    // An empty YAML document is a settings payload with nothing configured.
    if text.trim().is_empty() {
        return Ok(MenuSettings::default());
    }

    Ok(serde_yml::from_str(text)?)
}

/// Parse settings from JSON text.
pub fn from_json_str(text: &str) -> SettingsResult<MenuSettings> {
    Ok(serde_json::from_str(text)?)
}

/// Load settings from a file, picking the format from its extension.
pub fn load(path: &Path) -> SettingsResult<MenuSettings> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> SettingsResult<MenuSettings> = match extension.as_deref() {
        Some("yml" | "yaml") => from_yaml_str,
        Some("json") => from_json_str,
        _ => return Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!(path = %path.display(), "reading menu settings");
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = parse(&text)?;
    info!(
        path = %path.display(),
        sections = settings.menu_sections.len(),
        "menu settings loaded"
    );

    Ok(settings)
}
