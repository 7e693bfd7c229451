//! Permission set comparison

use tg_models::permissions::VIEW_STORY;

/// Compares a role's permission set before and after an update
pub trait PermissionsComparator: Send + Sync {
    /// True when `view_story` was granted before and is missing now
    fn is_view_story_permission_deleted(
        &self,
        old_permissions: &[String],
        new_permissions: &[String],
    ) -> bool;
}

/// Comparator over the built-in permission vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryPermissionsComparator;

impl PermissionsComparator for StoryPermissionsComparator {
    fn is_view_story_permission_deleted(
        &self,
        old_permissions: &[String],
        new_permissions: &[String],
    ) -> bool {
        is_view_story_permission_deleted(old_permissions, new_permissions)
    }
}

pub fn is_view_story_permission_deleted<S: AsRef<str>>(
    old_permissions: &[S],
    new_permissions: &[S],
) -> bool {
    contains(old_permissions, VIEW_STORY) && !contains(new_permissions, VIEW_STORY)
}

fn contains<S: AsRef<str>>(permissions: &[S], permission: &str) -> bool {
    permissions.iter().any(|p| p.as_ref() == permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_view_story_removed() {
        assert!(is_view_story_permission_deleted(
            &["view_story", "comment_story"],
            &["comment_story"],
        ));
        assert!(is_view_story_permission_deleted(&["view_story"], &[]));
    }

    #[test]
    fn test_view_story_kept_or_never_granted() {
        assert!(!is_view_story_permission_deleted(
            &["view_story"],
            &["view_story", "modify_story"],
        ));
        assert!(!is_view_story_permission_deleted(&["comment_story"], &["add_story"]));
        assert!(!is_view_story_permission_deleted::<&str>(&[], &[]));
    }

    #[test]
    fn test_view_story_added() {
        assert!(!is_view_story_permission_deleted(&[], &["view_story"]));
    }

    #[test]
    fn test_comparator_delegates() {
        let comparator = StoryPermissionsComparator;
        assert!(comparator.is_view_story_permission_deleted(
            &perms(&["view_story", "add_story"]),
            &perms(&["add_story"]),
        ));
        assert!(!comparator.is_view_story_permission_deleted(
            &perms(&["view_story"]),
            &perms(&["view_story"]),
        ));
    }
}
