//! Group-gated sidebar menu.
//!
//! Sections come from host settings and are filtered per viewer:
//! - `access` decides visibility from group membership
//! - `link` and `section` build the immutable output entities
//! - `edit` resolves the admin-only edit action
//! - `builder` runs the whole pass in configured order

mod access;
mod builder;
mod edit;
mod link;
mod section;
mod slug;

pub use access::is_visible;
pub use builder::MenuBuilder;
pub use edit::{EditTarget, extract_theme_id, resolve_edit_target};
pub use link::{ICON_KIND, LINK_CLASS_NAMES, Link, build_link};
pub use section::{EDIT_ACTION_ID, EDIT_ACTIONS_ICON, EditAction, MAIN_PANEL, Section, assemble};
pub use slug::slug;
