//! Sidebar sections assembled from section settings.

use serde::Serialize;

use super::link::Link;
use super::slug::slug;
use crate::models::SectionConfig;

/// Action id of the admin edit affordance.
pub const EDIT_ACTION_ID: &str = "editSection";

/// Header icon shown when a section has an edit action.
pub const EDIT_ACTIONS_ICON: &str = "pencil";

/// Sidebar panel every section is registered in.
pub const MAIN_PANEL: &str = "main";

/// Admin-only header action opening the owning component's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditAction {
    pub id: &'static str,
    /// Localized label, resolved by the host.
    pub label: String,
    /// Navigation target.
    pub target: String,
}

impl EditAction {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: EDIT_ACTION_ID,
            label: label.into(),
            target: target.into(),
        }
    }
}

/// One visible, collapsible group of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    id: String,
    title: String,
    links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_action: Option<EditAction>,
    actions_icon: Option<&'static str>,
    panel: &'static str,
}

impl Section {
    /// Identifier, the slug of the title.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Links in configured order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn edit_action(&self) -> Option<&EditAction> {
        self.edit_action.as_ref()
    }

    /// Header icon: `"pencil"` when an edit action exists.
    pub fn actions_icon(&self) -> Option<&'static str> {
        self.actions_icon
    }

    pub fn panel(&self) -> &'static str {
        self.panel
    }
}

/// Assemble a section from its settings, its built links, and the
/// build-wide edit action.
///
/// Returns `None` when there are no links: an empty section is never shown.
pub fn assemble(
    config: &SectionConfig,
    links: Vec<Link>,
    edit_action: Option<&EditAction>,
) -> Option<Section> {
    if links.is_empty() {
        return None;
    }

    let edit_action = edit_action.cloned();
    let actions_icon = edit_action.as_ref().map(|_| EDIT_ACTIONS_ICON);

    Some(Section {
        id: slug(&config.title),
        title: config.title.clone(),
        links,
        edit_action,
        actions_icon,
        panel: MAIN_PANEL,
    })
}
