//! Host collaborators consulted while building a menu.
//!
//! The menu core never looks up translations or rewrites URLs itself. The
//! host supplies both through these traits, so the same build runs against
//! a live site, a subfolder install, or a test fixture.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Localized string lookup.
pub trait Translator {
    /// Translate a key into display text.
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Host URL helper turning a site-relative path into the path to navigate to.
pub trait UrlNormalizer {
    fn normalize(&self, path: &str) -> String;
}

/// Translation table keyed by full translation key.
///
/// Missing keys translate to the key itself, so an untranslated label is
/// visible rather than blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: BTreeMap<String, String>,
}

impl Translations {
    /// An empty table.
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace one entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Translations {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Prefixes site-relative paths with the install's base path.
///
/// A site served from `/forum` turns `/admin/customize/themes/4` into
/// `/forum/admin/customize/themes/4`. The empty base path leaves paths alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath {
    prefix: String,
}

impl BasePath {
    /// Site served from the domain root.
    pub const fn root() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    /// Site served from a subfolder. Trailing slashes are ignored.
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim_end_matches('/');
        let prefix = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl UrlNormalizer for BasePath {
    fn normalize(&self, path: &str) -> String {
        if self.prefix.is_empty() || !path.starts_with('/') || path.starts_with("//") {
            return path.to_string();
        }

        let already_prefixed = path
            .strip_prefix(self.prefix.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if already_prefixed {
            return path.to_string();
        }

        format!("{}{path}", self.prefix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn translations_lookup_and_fallback() {
        let t = Translations::empty().with("theme_translations.4.edit_component", "Edit");
        assert_eq!(t.translate("theme_translations.4.edit_component"), "Edit");
        assert_eq!(t.translate("missing.key"), "missing.key");
    }

    #[test]
    fn translations_from_yaml() {
        let yaml = "theme_translations.4.edit_component: Edit component\n";
        let t: Translations = serde_yml::from_str(yaml).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(
            t.translate("theme_translations.4.edit_component"),
            "Edit component"
        );
    }

    #[test]
    fn closure_translator() {
        let t = |key: &str| key.to_uppercase();
        assert_eq!(t.translate("abc"), "ABC");
    }

    #[test]
    fn root_base_path_is_identity() {
        let urls = BasePath::root();
        assert_eq!(urls.normalize("/admin/customize/themes/4"), "/admin/customize/themes/4");
        assert_eq!(BasePath::new("/"), BasePath::root());
        assert_eq!(BasePath::new(""), BasePath::root());
    }

    #[test]
    fn subfolder_base_path() {
        let urls = BasePath::new("/forum/");
        assert_eq!(urls.prefix(), "/forum");
        assert_eq!(
            urls.normalize("/admin/customize/themes/4"),
            "/forum/admin/customize/themes/4"
        );
    }

    #[test]
    fn subfolder_without_leading_slash() {
        assert_eq!(BasePath::new("forum").prefix(), "/forum");
    }

    #[test]
    fn subfolder_leaves_other_paths() {
        let urls = BasePath::new("/forum");
        assert_eq!(urls.normalize("/forum/latest"), "/forum/latest");
        assert_eq!(urls.normalize("/forum"), "/forum");
        assert_eq!(urls.normalize("/forums"), "/forum/forums");
        assert_eq!(urls.normalize("https://example.com/x"), "https://example.com/x");
        assert_eq!(urls.normalize("//cdn.example.com/x"), "//cdn.example.com/x");
    }
}
