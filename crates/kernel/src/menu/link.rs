//! Sidebar links built from link settings.

use serde::Serialize;
use tracing::trace;

use super::slug::slug;
use crate::models::LinkConfig;

/// Prefix kind for every link: a named icon.
pub const ICON_KIND: &str = "icon";

/// CSS class applied to every link element.
pub const LINK_CLASS_NAMES: &str = "link";

/// Prefix for link identifiers, keeping them apart from section identifiers.
const LINK_ID_PREFIX: &str = "link-";

/// One navigable entry within a section.
///
/// Fields are read-only; build a new link instead of patching one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    id: String,
    display_text: String,
    target: String,
    icon_kind: &'static str,
    icon_value: String,
    /// Always `None`: the host must navigate to `target` directly because
    /// it may be an external URL with no internal route.
    route_hint: Option<String>,
    class_names: &'static str,
}

impl Link {
    /// Identifier, `"link-"` followed by the slug of the display text.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Navigation target, exactly as configured.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn icon_kind(&self) -> &'static str {
        self.icon_kind
    }

    pub fn icon_value(&self) -> &str {
        &self.icon_value
    }

    /// Internal route name. Always `None`.
    pub fn route_hint(&self) -> Option<&str> {
        self.route_hint.as_deref()
    }

    pub fn class_names(&self) -> &'static str {
        self.class_names
    }
}

/// Build a link from its settings record.
///
/// The URL and icon are passed through untouched; no scheme or path
/// validation happens here.
pub fn build_link(config: &LinkConfig) -> Link {
    let id = format!("{LINK_ID_PREFIX}{}", slug(&config.text));
    trace!(link = %id, target = %config.url, "built link");

    Link {
        id,
        display_text: config.text.clone(),
        target: config.url.clone(),
        icon_kind: ICON_KIND,
        icon_value: config.icon.clone(),
        route_hint: None,
        class_names: LINK_CLASS_NAMES,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn build_copies_properties() {
        let link = build_link(&LinkConfig::new("About Us", "/about", "circle-info"));

        assert_eq!(link.display_text(), "About Us");
        assert_eq!(link.target(), "/about");
        assert_eq!(link.icon_value(), "circle-info");
        assert_eq!(link.icon_kind(), "icon");
        assert_eq!(link.class_names(), "link");
    }

    #[test]
    fn id_is_prefixed_slug() {
        let link = build_link(&LinkConfig::new("My Awesome Link", "/awesome", "star"));
        assert_eq!(link.id(), "link-my-awesome-link");
    }

    #[test]
    fn id_keeps_special_characters() {
        let link = build_link(&LinkConfig::new("FAQ & Help", "/faq", "question"));
        assert_eq!(link.id(), "link-faq-&-help");
    }

    #[test]
    fn route_hint_is_always_none() {
        let link = build_link(&LinkConfig::new("External Link", "https://example.com", "link"));
        assert_eq!(link.route_hint(), None);
    }

    #[test]
    fn targets_pass_through() {
        let internal = build_link(&LinkConfig::new("Preferences", "/my/preferences", "cog"));
        assert_eq!(internal.target(), "/my/preferences");

        let external = build_link(&LinkConfig::new(
            "Documentation",
            "https://docs.example.com",
            "book",
        ));
        assert_eq!(external.target(), "https://docs.example.com");

        let odd = build_link(&LinkConfig::new("Odd", "not a url at all", ""));
        assert_eq!(odd.target(), "not a url at all");
        assert_eq!(odd.icon_value(), "");
    }

    #[test]
    fn serializes_for_host() {
        let link = build_link(&LinkConfig::new("FAQ", "/faq", "star"));
        let json = serde_json::to_value(&link).unwrap();

        assert_eq!(json["id"], "link-faq");
        assert_eq!(json["displayText"], "FAQ");
        assert_eq!(json["target"], "/faq");
        assert_eq!(json["iconKind"], "icon");
        assert_eq!(json["iconValue"], "star");
        assert!(json["routeHint"].is_null());
        assert!(json.as_object().unwrap().contains_key("routeHint"));
        assert_eq!(json["classNames"], "link");
    }
}
