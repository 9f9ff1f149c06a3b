//! Input records: host settings and viewer context.

pub mod settings;
pub mod viewer;

pub use settings::{LinkConfig, MenuSettings, SectionConfig};
pub use viewer::{GroupId, ViewerContext};
