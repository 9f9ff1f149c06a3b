//! Group menu host harness.
//!
//! Loads menu settings and a viewer from disk, builds the visible sections,
//! and prints them as JSON for the rendering layer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use group_menu::config::Config;
use group_menu::host::{BasePath, Translations};
use group_menu::menu::MenuBuilder;
use group_menu::models::ViewerContext;
use group_menu::settings;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(settings = %config.settings_path.display(), "Configuration loaded");

    let menu_settings =
        settings::load(&config.settings_path).context("failed to load menu settings")?;

    let viewer = config
        .viewer_path
        .as_deref()
        .map(load_viewer)
        .transpose()?;

    let translations = match config.translations_path.as_deref() {
        Some(path) => load_translations(path)?,
        None => Translations::empty(),
    };
    let urls = BasePath::new(&config.base_path);

    let builder = MenuBuilder::new(&translations, &urls);
    let sections = builder.build_for_session(&menu_settings.menu_sections, viewer.as_ref());
    info!(sections = sections.len(), "Menu built");

    let output = serde_json::to_string_pretty(&sections).context("failed to serialize menu")?;
    println!("{output}");

    Ok(())
}

fn load_viewer(path: &Path) -> Result<ViewerContext> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read viewer file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid viewer JSON in {}", path.display()))
}

fn load_translations(path: &Path) -> Result<Translations> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read translations file {}", path.display()))?;
    serde_yml::from_str(&text)
        .with_context(|| format!("invalid translations YAML in {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout carries only the menu JSON.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
