//! Menu builder - turns section settings and a viewer into visible sections.

use tracing::debug;

use super::access::is_visible;
use super::edit::resolve_edit_target;
use super::link::build_link;
use super::section::{EditAction, Section, assemble};
use crate::host::{BasePath, Translations, Translator, UrlNormalizer};
use crate::models::{SectionConfig, ViewerContext};

static ROOT_URLS: BasePath = BasePath::root();
static NO_TRANSLATIONS: Translations = Translations::empty();

/// Builds the visible sections for one viewer.
///
/// Holds only the host collaborators; every `build` call works on its own
/// inputs and returns fresh sections.
pub struct MenuBuilder<'a> {
    translator: &'a dyn Translator,
    urls: &'a dyn UrlNormalizer,
}

impl<'a> MenuBuilder<'a> {
    /// Create a builder using the host's translator and URL helper.
    pub fn new(translator: &'a dyn Translator, urls: &'a dyn UrlNormalizer) -> Self {
        Self { translator, urls }
    }

    /// Build the sections visible to `viewer`, in configured order.
    ///
    /// A section is kept only if it lists at least one group, the viewer is
    /// in one of them, and it has at least one link. Sections with equal
    /// identifiers are all kept.
    pub fn build(&self, configs: &[SectionConfig], viewer: &ViewerContext) -> Vec<Section> {
        let edit_action = self.edit_action(viewer);
        let mut sections = Vec::with_capacity(configs.len());

        for config in configs {
            if !is_visible(&config.groups, &viewer.group_ids) {
                debug!(
                    section = %config.title,
                    groups = config.groups.len(),
                    "section hidden from viewer"
                );
                continue;
            }

            let links = config.links.iter().map(build_link).collect();

            match assemble(config, links, edit_action.as_ref()) {
                Some(section) => sections.push(section),
                None => debug!(section = %config.title, "section has no links"),
            }
        }

        debug!(
            configured = configs.len(),
            visible = sections.len(),
            edit = edit_action.is_some(),
            "built menu"
        );

        sections
    }

    /// Build for the current session, which may have no signed-in user.
    ///
    /// Anonymous visitors never see group-gated sections.
    pub fn build_for_session(
        &self,
        configs: &[SectionConfig],
        viewer: Option<&ViewerContext>,
    ) -> Vec<Section> {
        match viewer {
            Some(viewer) => self.build(configs, viewer),
            None => {
                debug!("no current user; menu is empty");
                Vec::new()
            }
        }
    }

    /// Resolve the edit action once per build; it does not vary by section.
    fn edit_action(&self, viewer: &ViewerContext) -> Option<EditAction> {
        let target = resolve_edit_target(viewer, self.urls)?;
        let label = self.translator.translate(&target.label_key());
        Some(EditAction::new(label, target.url))
    }
}

impl Default for MenuBuilder<'static> {
    /// Untranslated labels and a site served from the domain root.
    fn default() -> Self {
        Self::new(&NO_TRANSLATIONS, &ROOT_URLS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::LinkConfig;

    fn section(title: &str, groups: &[i64], links: &[&str]) -> SectionConfig {
        let mut config = SectionConfig::new(title);
        for id in groups {
            config = config.group(*id);
        }
        for text in links {
            config = config.link(LinkConfig::new(*text, "/x", "star"));
        }
        config
    }

    #[test]
    fn empty_config_builds_nothing() {
        let viewer = ViewerContext::new([10]);
        assert!(MenuBuilder::default().build(&[], &viewer).is_empty());
    }

    #[test]
    fn filters_and_keeps_order() {
        let configs = vec![
            section("First", &[10], &["One"]),
            section("Hidden", &[1], &["Secret"]),
            section("No Groups", &[], &["Lost"]),
            section("No Links", &[10], &[]),
            section("Second", &[2, 10], &["Two", "Three"]),
        ];
        let viewer = ViewerContext::new([10]);

        let sections = MenuBuilder::default().build(&configs, &viewer);
        let ids: Vec<&str> = sections.iter().map(|s| s.id()).collect();

        assert_eq!(ids, vec!["first", "second"]);
        let link_ids: Vec<&str> = sections[1].links().iter().map(|l| l.id()).collect();
        assert_eq!(link_ids, vec!["link-two", "link-three"]);
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let configs = vec![
            section("Same Title", &[10], &["A"]),
            section("same   title", &[10], &["B"]),
        ];
        let sections = MenuBuilder::default().build(&configs, &ViewerContext::new([10]));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id(), sections[1].id());
    }

    #[test]
    fn edit_action_uses_collaborators() {
        let translations =
            Translations::empty().with("theme_translations.8.edit_component", "Edit menu");
        let urls = BasePath::new("/forum");
        let builder = MenuBuilder::new(&translations, &urls);

        let viewer = ViewerContext::new([3])
            .admin(true)
            .theme_source("theme_translations.8.");
        let sections = builder.build(&[section("Staff Menu", &[3], &["Tools"])], &viewer);

        let action = sections[0].edit_action().unwrap();
        assert_eq!(action.label, "Edit menu");
        assert_eq!(action.target, "/forum/admin/customize/themes/8");
    }

    #[test]
    fn edit_action_shared_by_all_sections() {
        let viewer = ViewerContext::new([3])
            .admin(true)
            .theme_source("theme_translations.8.");
        let configs = vec![
            section("One", &[3], &["A"]),
            section("Two", &[3], &["B"]),
        ];
        let sections = MenuBuilder::default().build(&configs, &viewer);

        assert_eq!(sections[0].edit_action(), sections[1].edit_action());
        assert!(sections[0].edit_action().is_some());
    }

    #[test]
    fn anonymous_session_builds_nothing() {
        let configs = vec![section("Open", &[0], &["A"])];
        assert!(
            MenuBuilder::default()
                .build_for_session(&configs, None)
                .is_empty()
        );

        let viewer = ViewerContext::new([0]);
        assert_eq!(
            MenuBuilder::default()
                .build_for_session(&configs, Some(&viewer))
                .len(),
            1
        );
    }
}
