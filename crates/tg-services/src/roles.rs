//! Project role service
//!
//! Reads a project's roles and replaces a role's permission set. Revoking
//! `view_story` also unassigns the role's members from their stories.

use std::collections::HashMap;
use std::sync::Arc;

use tg_db::{
    ProjectRoleFilters, ProjectRoleRepository, StoryAssignmentFilters, StoryAssignmentRepository,
};
use tg_events::ProjectRoleEvents;
use tg_models::{Project, ProjectRole};
use tg_permissions::{PermissionsComparator, StoryPermissionsComparator};
use tracing::{debug, info, warn};

use crate::error::{NonEditableRoleError, RoleServiceResult};

/// Service over a project's roles
///
/// # Example
/// ```ignore
/// let service = ProjectRoleService::new(roles_repo, assignments_repo, role_events);
/// let role = service.get_project_role(&project, "general").await?.ok_or(...)?;
/// let role = service
///     .update_project_role_permissions(role, vec!["comment_story".into()])
///     .await?;
/// ```
pub struct ProjectRoleService<R, A, E, P = StoryPermissionsComparator> {
    roles: Arc<R>,
    assignments: Arc<A>,
    events: Arc<E>,
    permissions: P,
}

impl<R, A, E> ProjectRoleService<R, A, E>
where
    R: ProjectRoleRepository,
    A: StoryAssignmentRepository,
    E: ProjectRoleEvents,
{
    pub fn new(roles: Arc<R>, assignments: Arc<A>, events: Arc<E>) -> Self {
        Self {
            roles,
            assignments,
            events,
            permissions: StoryPermissionsComparator,
        }
    }
}

impl<R, A, E, P> ProjectRoleService<R, A, E, P>
where
    R: ProjectRoleRepository,
    A: StoryAssignmentRepository,
    E: ProjectRoleEvents,
    P: PermissionsComparator,
{
    /// Swap the permissions comparator
    pub fn with_comparator<Q: PermissionsComparator>(
        self,
        permissions: Q,
    ) -> ProjectRoleService<R, A, E, Q> {
        ProjectRoleService {
            roles: self.roles,
            assignments: self.assignments,
            events: self.events,
            permissions,
        }
    }

    /// All roles of the project, in repository order
    pub async fn get_project_roles(
        &self,
        project: &Project,
    ) -> RoleServiceResult<Vec<ProjectRole>> {
        debug!(project_id = %project.id, "Loading project roles");
        let roles = self
            .roles
            .get_project_roles(ProjectRoleFilters::new().with_project_id(project.id))
            .await?;
        Ok(roles)
    }

    /// The project's role with this slug; `None` when there is no such role
    pub async fn get_project_role(
        &self,
        project: &Project,
        slug: &str,
    ) -> RoleServiceResult<Option<ProjectRole>> {
        debug!(project_id = %project.id, slug, "Loading project role");
        let role = self
            .roles
            .get_project_role(
                ProjectRoleFilters::new()
                    .with_project_id(project.id)
                    .with_slug(slug),
            )
            .await?;
        Ok(role)
    }

    /// The project's roles keyed by slug. A repeated slug keeps the last role.
    pub async fn get_project_roles_as_dict(
        &self,
        project: &Project,
    ) -> RoleServiceResult<HashMap<String, ProjectRole>> {
        let roles = self.get_project_roles(project).await?;
        Ok(roles
            .into_iter()
            .map(|role| (role.slug.clone(), role))
            .collect())
    }

    /// Replace the role's permissions and return the persisted role.
    ///
    /// Admin roles are rejected before anything is touched. The update event
    /// is emitted after the write; when `view_story` was revoked, the role's
    /// story assignments are deleted last.
    pub async fn update_project_role_permissions(
        &self,
        mut role: ProjectRole,
        permissions: Vec<String>,
    ) -> RoleServiceResult<ProjectRole> {
        if role.is_admin {
            warn!(
                role_id = %role.id,
                project_id = %role.project_id,
                "Refusing to edit permissions of an admin role"
            );
            return Err(NonEditableRoleError::default().into());
        }

        let view_story_is_deleted = !role.permissions.is_empty()
            && self
                .permissions
                .is_view_story_permission_deleted(&role.permissions, &permissions);

        role.permissions = permissions;
        let updated = self.roles.update_project_role_permissions(&role).await?;
        info!(
            role_id = %updated.id,
            project_id = %updated.project_id,
            permissions = ?updated.permissions,
            "Project role permissions updated"
        );

        self.events
            .emit_event_when_project_role_permissions_are_updated(&updated)
            .await?;

        if view_story_is_deleted {
            let deleted = self
                .assignments
                .delete_stories_assignments(StoryAssignmentFilters::new().with_role_id(role.id))
                .await?;
            info!(role_id = %role.id, deleted, "Unassigned stories after view_story was revoked");
        }

        Ok(updated)
    }
}
