//! The user a menu is being built for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a user group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

/// Viewer state supplied by the host once per build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerContext {
    /// Groups the viewer belongs to.
    #[serde(default)]
    pub group_ids: HashSet<GroupId>,

    /// Whether the viewer is a site administrator.
    #[serde(default)]
    pub is_admin: bool,

    /// Host string that may embed the owning component's numeric id,
    /// e.g. `theme_translations.42.`.
    #[serde(default)]
    pub theme_identifier_source: String,
}

impl ViewerContext {
    /// Create a non-admin viewer belonging to the given groups.
    pub fn new(groups: impl IntoIterator<Item = i64>) -> Self {
        Self {
            group_ids: groups.into_iter().map(GroupId).collect(),
            is_admin: false,
            theme_identifier_source: String::new(),
        }
    }

    /// Set the admin flag.
    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Set the theme identifier source.
    pub fn theme_source(mut self, source: impl Into<String>) -> Self {
        self.theme_identifier_source = source.into();
        self
    }
}
