//! Project role model
//!
//! Table: project_roles

use serde::{Deserialize, Serialize};
use tg_core::traits::{Entity, Id, Identifiable, ProjectScoped};
use uuid::Uuid;
use validator::Validate;

/// Project role entity
///
/// A named set of permissions scoped to one project. The slug is unique
/// within the project; the database enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRole {
    pub id: Id,

    pub project_id: Id,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 250))]
    pub slug: String,

    /// Sort position inside the project
    #[serde(default)]
    pub order: i64,

    /// Admin roles hold every permission and cannot be edited
    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    pub permissions: Vec<String>,
}

impl ProjectRole {
    /// Create a non-admin role with no permissions; the slug is derived from the name
    pub fn new(project_id: Id, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            project_id,
            slug: slugify(&name),
            name,
            order: 0,
            is_admin: false,
            permissions: Vec::new(),
        }
    }

    /// Create the administrator role of a project
    pub fn admin(project_id: Id) -> Self {
        Self {
            order: 1,
            is_admin: true,
            permissions: permissions::ALL.iter().map(|p| p.to_string()).collect(),
            ..Self::new(project_id, "Administrator")
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Check if role has a specific permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Whether the permission set may be changed
    pub fn is_editable(&self) -> bool {
        !self.is_admin
    }
}

impl Identifiable for ProjectRole {
    fn id(&self) -> Id {
        self.id
    }
}

impl ProjectScoped for ProjectRole {
    fn project_id(&self) -> Id {
        self.project_id
    }
}

impl Entity for ProjectRole {
    const TABLE_NAME: &'static str = "project_roles";
    const TYPE_NAME: &'static str = "ProjectRole";
}

/// Lowercase ASCII slug: runs of anything non-alphanumeric collapse to one `-`
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Project permissions understood by the permissions module
pub mod permissions {
    pub const ADD_STORY: &str = "add_story";
    pub const COMMENT_STORY: &str = "comment_story";
    pub const DELETE_STORY: &str = "delete_story";
    pub const MODIFY_STORY: &str = "modify_story";
    /// Grants visibility of stories; assignments depend on it
    pub const VIEW_STORY: &str = "view_story";

    pub const ALL: &[&str] = &[ADD_STORY, COMMENT_STORY, DELETE_STORY, MODIFY_STORY, VIEW_STORY];
}
