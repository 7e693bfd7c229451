//! Permission set validation
//!
//! Run by callers before a role's permissions are replaced.

use tg_core::error::ValidationErrors;
use tg_models::permissions::{ALL, VIEW_STORY};

/// Every entry belongs to the project permission vocabulary
pub fn permissions_are_valid<S: AsRef<str>>(permissions: &[S]) -> bool {
    permissions.iter().all(|p| ALL.contains(&p.as_ref()))
}

/// Story permissions other than `view_story` are meaningless without it
pub fn permissions_are_compatible<S: AsRef<str>>(permissions: &[S]) -> bool {
    let has_view_story = permissions.iter().any(|p| p.as_ref() == VIEW_STORY);
    has_view_story || permissions.is_empty()
}

/// Validation contract for a new permission set
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionsContract;

impl PermissionsContract {
    pub const ATTRIBUTE: &'static str = "permissions";

    pub fn validate<S: AsRef<str>>(&self, permissions: &[S]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for permission in permissions.iter().map(AsRef::as_ref) {
            if !ALL.contains(&permission) {
                errors.add(
                    Self::ATTRIBUTE,
                    format!("contains an unknown permission: {}", permission),
                );
            }
        }

        if !permissions_are_compatible(permissions) {
            errors.add(Self::ATTRIBUTE, format!("require {}", VIEW_STORY));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
