//! Menu settings as delivered by the host's theme settings mechanism.
//!
//! The payload is a list of section records under the `menu_sections` key.
//! Each record names the groups allowed to see it and the links it shows.

use serde::{Deserialize, Deserializer, Serialize};

use super::viewer::GroupId;

/// Root of the theme settings payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSettings {
    /// Configured sections, in display order. Absent or null means no sections.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub menu_sections: Vec<SectionConfig>,
}

impl MenuSettings {
    /// Check if no sections are configured.
    pub fn is_empty(&self) -> bool {
        self.menu_sections.is_empty()
    }
}

/// Read an optional list, treating an explicit null like a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One configured sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Section header text. Also the source of the section identifier.
    pub title: String,

    /// Groups allowed to see the section (empty or null = nobody).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub groups: Vec<GroupId>,

    /// Links shown in the section, in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<LinkConfig>,
}

impl SectionConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            groups: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Allow a group to see this section.
    pub fn group(mut self, id: i64) -> Self {
        self.groups.push(GroupId(id));
        self
    }

    /// Append a link.
    pub fn link(mut self, link: LinkConfig) -> Self {
        self.links.push(link);
        self
    }
}

/// One configured link inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Display text. Also the source of the link identifier.
    pub text: String,

    /// Navigation target: an internal path (`/faq`) or an external URL.
    pub url: String,

    /// Icon name (e.g., "star", "circle-info").
    pub icon: String,
}

impl LinkConfig {
    pub fn new(text: impl Into<String>, url: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }
}
