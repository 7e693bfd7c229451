//! Filter criteria for repository lookups
//!
//! Every criterion that is set must match (AND semantics).

use sqlx::{Postgres, QueryBuilder};
use tg_core::traits::Id;

/// Criteria for selecting project roles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRoleFilters {
    pub id: Option<Id>,
    pub project_id: Option<Id>,
    pub slug: Option<String>,
}

impl ProjectRoleFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_project_id(mut self, project_id: Id) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.project_id.is_none() && self.slug.is_none()
    }

    pub(crate) fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        let mut has_where = false;
        if let Some(id) = self.id {
            push_condition(builder, &mut has_where);
            builder.push("id = ").push_bind(id);
        }
        if let Some(project_id) = self.project_id {
            push_condition(builder, &mut has_where);
            builder.push("project_id = ").push_bind(project_id);
        }
        if let Some(slug) = &self.slug {
            push_condition(builder, &mut has_where);
            builder.push("slug = ").push_bind(slug.clone());
        }
    }
}

/// Criteria for selecting story assignments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryAssignmentFilters {
    pub story_id: Option<Id>,
    pub user_id: Option<Id>,
    /// Assignments whose assignee holds this role in the story's project
    pub role_id: Option<Id>,
    /// Assignments on stories of this project
    pub project_id: Option<Id>,
}

impl StoryAssignmentFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_story_id(mut self, story_id: Id) -> Self {
        self.story_id = Some(story_id);
        self
    }

    pub fn with_user_id(mut self, user_id: Id) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_role_id(mut self, role_id: Id) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub fn with_project_id(mut self, project_id: Id) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.story_id.is_none()
            && self.user_id.is_none()
            && self.role_id.is_none()
            && self.project_id.is_none()
    }

    /// Conditions over the `sa` alias of `story_assignments`
    pub(crate) fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        let mut has_where = false;
        if let Some(story_id) = self.story_id {
            push_condition(builder, &mut has_where);
            builder.push("sa.story_id = ").push_bind(story_id);
        }
        if let Some(user_id) = self.user_id {
            push_condition(builder, &mut has_where);
            builder.push("sa.user_id = ").push_bind(user_id);
        }
        if let Some(project_id) = self.project_id {
            push_condition(builder, &mut has_where);
            builder
                .push("sa.story_id IN (SELECT s.id FROM stories s WHERE s.project_id = ")
                .push_bind(project_id)
                .push(")");
        }
        if let Some(role_id) = self.role_id {
            push_condition(builder, &mut has_where);
            builder
                .push(
                    "EXISTS (SELECT 1 FROM stories s \
                     JOIN project_memberships m ON m.project_id = s.project_id \
                     WHERE s.id = sa.story_id AND m.user_id = sa.user_id AND m.role_id = ",
                )
                .push_bind(role_id)
                .push(")");
        }
    }
}

fn push_condition(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}
