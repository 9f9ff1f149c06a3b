//! Group menu test utilities.
//!
//! Helpers for integration testing: section and link fixtures, viewer
//! builders, and assertion utilities for built menus.

use group_menu::{GroupId, LinkConfig, SectionConfig, ViewerContext};

/// Theme identifier source for a component with the given id.
pub fn theme_source(theme_id: u64) -> String {
    format!("theme_translations.{theme_id}.")
}

/// Create a test section with default values: no groups, no links.
pub fn test_section(title: &str) -> TestSection {
    TestSection {
        title: title.to_string(),
        groups: Vec::new(),
        links: Vec::new(),
    }
}

/// A section settings builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestSection {
    pub title: String,
    pub groups: Vec<i64>,
    pub links: Vec<LinkConfig>,
}

impl TestSection {
    /// Allow these groups.
    pub fn for_groups(mut self, groups: &[i64]) -> Self {
        self.groups.extend_from_slice(groups);
        self
    }

    /// Add a link.
    pub fn with_link(mut self, text: &str, url: &str, icon: &str) -> Self {
        self.links.push(LinkConfig::new(text, url, icon));
        self
    }

    /// Add a link with a path derived from its text and a star icon.
    pub fn with_simple_link(self, text: &str) -> Self {
        let url = format!("/{}", text.to_lowercase().replace(' ', "-"));
        self.with_link(text, &url, "star")
    }

    /// Build the settings record.
    pub fn build(self) -> SectionConfig {
        let mut section = SectionConfig::new(self.title);
        section.groups = self.groups.into_iter().map(GroupId).collect();
        section.links = self.links;
        section
    }
}

/// Create a regular (non-admin) viewer in the given groups.
pub fn member(groups: &[i64]) -> ViewerContext {
    ViewerContext::new(groups.iter().copied())
}

/// Create an admin viewer in the given groups, owning theme component `theme_id`.
pub fn admin(groups: &[i64], theme_id: u64) -> ViewerContext {
    member(groups).admin(true).theme_source(theme_source(theme_id))
}

/// Create an admin viewer whose theme component cannot be identified.
pub fn admin_without_theme(groups: &[i64]) -> ViewerContext {
    member(groups).admin(true)
}

/// Settings fixtures shaped like the host's theme settings.
pub mod fixtures {
    /// One section for trust level 0 (group 10) with two links.
    pub const TEST_MENU_YAML: &str = r#"
menu_sections:
  - title: Test Menu
    groups: [10]
    links:
      - icon: circle-info
        text: About
        url: /about
      - icon: star
        text: FAQ
        url: /faq
"#;

    /// One section for admins (group 1).
    pub const ADMIN_ONLY_JSON: &str = r#"{
  "menu_sections": [
    {
      "title": "Admin Only Menu",
      "groups": [1],
      "links": [{"icon": "wrench", "text": "Admin Panel", "url": "/admin"}]
    }
  ]
}"#;

    /// Two sections for group 10.
    pub const MULTIPLE_SECTIONS_YAML: &str = r#"
menu_sections:
  - title: First Menu
    groups: [10]
    links:
      - icon: star
        text: Link One
        url: /one
  - title: Second Menu
    groups: [10]
    links:
      - icon: heart
        text: Link Two
        url: /two
"#;

    /// One section for staff (group 3).
    pub const STAFF_MENU_YAML: &str = r#"
menu_sections:
  - title: Staff Menu
    groups: [3]
    links:
      - icon: wrench
        text: Tools
        url: /tools
"#;
}

/// Assertion helpers for built menus.
pub mod assert {
    use group_menu::Section;

    /// Assert the built sections have exactly these ids, in order.
    pub fn section_ids(sections: &[Section], expected: &[&str]) {
        let actual: Vec<&str> = sections.iter().map(|s| s.id()).collect();
        assert_eq!(actual, expected, "section ids mismatch");
    }

    /// Assert a section has exactly these link ids, in order.
    pub fn link_ids(section: &Section, expected: &[&str]) {
        let actual: Vec<&str> = section.links().iter().map(|l| l.id()).collect();
        assert_eq!(
            actual,
            expected,
            "link ids mismatch in section '{}'",
            section.id()
        );
    }

    /// Assert no section carries an edit action.
    pub fn no_edit_actions(sections: &[Section]) {
        for section in sections {
            assert!(
                section.edit_action().is_none(),
                "Expected no edit action on section '{}'",
                section.id()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let section = test_section("Docs")
            .for_groups(&[3, 10])
            .with_link("About", "/about", "circle-info")
            .with_simple_link("Link Two")
            .build();

        assert_eq!(section.title, "Docs");
        assert_eq!(section.groups.len(), 2);
        assert_eq!(section.links.len(), 2);
        assert_eq!(section.links[1].url, "/link-two");
        assert_eq!(section.links[1].icon, "star");
    }

    #[test]
    fn test_viewers() {
        let viewer = member(&[10]);
        assert!(!viewer.is_admin);
        assert_eq!(viewer.group_ids.len(), 1);

        let viewer = admin(&[3], 42);
        assert!(viewer.is_admin);
        assert_eq!(viewer.theme_identifier_source, "theme_translations.42.");

        let viewer = admin_without_theme(&[3]);
        assert!(viewer.is_admin);
        assert!(viewer.theme_identifier_source.is_empty());
    }
}
