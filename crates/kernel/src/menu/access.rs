//! Group-based section visibility.

use std::collections::HashSet;

use crate::models::GroupId;

/// Check if a viewer in `viewer_groups` may see a section open to `allowed_groups`.
///
/// - An empty `allowed_groups` hides the section from everyone.
/// - Otherwise one shared group is enough.
pub fn is_visible(allowed_groups: &[GroupId], viewer_groups: &HashSet<GroupId>) -> bool {
    if allowed_groups.is_empty() {
        return false;
    }

    allowed_groups.iter().any(|id| viewer_groups.contains(id))
}
