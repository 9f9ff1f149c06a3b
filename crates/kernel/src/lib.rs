//! Group Menu Kernel Library
//!
//! Builds group-gated sidebar menu sections for a host application.
//! The `group-menu` binary is a thin harness around [`menu::MenuBuilder`].

pub mod config;
pub mod error;
pub mod host;
pub mod menu;
pub mod models;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use menu::{Link, MenuBuilder, Section};
pub use models::{GroupId, LinkConfig, MenuSettings, SectionConfig, ViewerContext};
