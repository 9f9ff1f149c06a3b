//! Admin "edit section" targets.
//!
//! Admins get a header action that opens the settings screen of the theme
//! component owning the menu. The component id is not configured anywhere;
//! it is recovered from the host's translation prefix for the component,
//! which looks like `theme_translations.42.`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::host::UrlNormalizer;
use crate::models::ViewerContext;

/// Component id marker inside the theme identifier source.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static THEME_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"theme_translations\.([0-9]+)\.").expect("valid regex literal")
});

/// Admin screen for a theme component, before URL normalization.
const THEME_ADMIN_PATH: &str = "/admin/customize/themes";

/// Where the edit action points, and which component it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    /// Id of the owning theme component, as the decimal digits found in
    /// the source. Never parsed, so ids of any length are kept intact.
    pub theme_id: String,
    /// Normalized path of the component's admin screen.
    pub url: String,
}

impl EditTarget {
    /// Translation key of the edit action label.
    pub fn label_key(&self) -> String {
        format!("theme_translations.{}.edit_component", self.theme_id)
    }
}

/// Extract the component id from a theme identifier source.
///
/// Returns `None` when the marker is missing. Only ASCII digits count.
pub fn extract_theme_id(source: &str) -> Option<String> {
    THEME_ID_PATTERN
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Resolve the edit target for a viewer.
///
/// Non-admins never get one. Admins get one only when the component id can
/// be recovered; otherwise the action is simply left out.
pub fn resolve_edit_target(
    viewer: &ViewerContext,
    urls: &dyn UrlNormalizer,
) -> Option<EditTarget> {
    if !viewer.is_admin {
        return None;
    }

    let Some(theme_id) = extract_theme_id(&viewer.theme_identifier_source) else {
        debug!(
            source = %viewer.theme_identifier_source,
            "no theme component id found; edit action disabled"
        );
        return None;
    };

    let url = urls.normalize(&format!("{THEME_ADMIN_PATH}/{theme_id}"));
    debug!(theme_id = %theme_id, url = %url, "resolved edit target");

    Some(EditTarget { theme_id, url })
}
