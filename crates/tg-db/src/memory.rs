//! In-memory repositories for development and testing

use std::collections::HashMap;

use async_trait::async_trait;
use tg_core::traits::{Entity, Id};
use tg_models::{ProjectMembership, ProjectRole, StoryAssignment};
use tokio::sync::RwLock;

use crate::filters::{ProjectRoleFilters, StoryAssignmentFilters};
use crate::repository::{
    reject_unfiltered_delete, ProjectRoleRepository, RepositoryError, RepositoryResult,
    StoryAssignmentRepository,
};

/// In-memory project role store
#[derive(Default)]
pub struct MemoryProjectRoleRepository {
    roles: RwLock<Vec<ProjectRole>>,
}

impl MemoryProjectRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a role; slugs must be unique per project
    pub async fn insert(&self, role: ProjectRole) -> RepositoryResult<ProjectRole> {
        let mut roles = self.roles.write().await;
        if roles
            .iter()
            .any(|r| r.project_id == role.project_id && r.slug == role.slug)
        {
            return Err(RepositoryError::Conflict(format!(
                "Slug '{}' is already taken in project {}",
                role.slug, role.project_id
            )));
        }
        roles.push(role.clone());
        Ok(role)
    }

    fn matches(role: &ProjectRole, filters: &ProjectRoleFilters) -> bool {
        filters.id.map_or(true, |id| role.id == id)
            && filters.project_id.map_or(true, |id| role.project_id == id)
            && filters.slug.as_deref().map_or(true, |slug| role.slug == slug)
    }
}

#[async_trait]
impl ProjectRoleRepository for MemoryProjectRoleRepository {
    async fn get_project_roles(
        &self,
        filters: ProjectRoleFilters,
    ) -> RepositoryResult<Vec<ProjectRole>> {
        let roles = self.roles.read().await;
        let mut matching: Vec<ProjectRole> = roles
            .iter()
            .filter(|r| Self::matches(r, &filters))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(matching)
    }

    async fn get_project_role(
        &self,
        filters: ProjectRoleFilters,
    ) -> RepositoryResult<Option<ProjectRole>> {
        Ok(self.get_project_roles(filters).await?.into_iter().next())
    }

    async fn update_project_role_permissions(
        &self,
        role: &ProjectRole,
    ) -> RepositoryResult<ProjectRole> {
        let mut roles = self.roles.write().await;
        let stored = roles.iter_mut().find(|r| r.id == role.id).ok_or_else(|| {
            RepositoryError::NotFound(format!(
                "{} with id {} not found",
                ProjectRole::TYPE_NAME,
                role.id
            ))
        })?;
        stored.permissions = role.permissions.clone();
        Ok(stored.clone())
    }
}

/// In-memory story assignment store.
///
/// Keeps the story -> project index and the memberships needed to resolve
/// which role an assignment belongs to.
#[derive(Default)]
pub struct MemoryStoryAssignmentRepository {
    stories: RwLock<HashMap<Id, Id>>,
    memberships: RwLock<Vec<ProjectMembership>>,
    assignments: RwLock<Vec<StoryAssignment>>,
}

impl MemoryStoryAssignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a story of a project
    pub async fn add_story(&self, story_id: Id, project_id: Id) {
        self.stories.write().await.insert(story_id, project_id);
    }

    pub async fn add_membership(&self, membership: ProjectMembership) {
        self.memberships.write().await.push(membership);
    }

    /// Assign a user to a registered story
    pub async fn assign(&self, story_id: Id, user_id: Id) -> RepositoryResult<StoryAssignment> {
        if !self.stories.read().await.contains_key(&story_id) {
            return Err(RepositoryError::NotFound(format!("Story with id {} not found", story_id)));
        }
        let assignment = StoryAssignment::new(story_id, user_id);
        self.assignments.write().await.push(assignment.clone());
        Ok(assignment)
    }

    /// Snapshot of the stored assignments
    pub async fn assignments(&self) -> Vec<StoryAssignment> {
        self.assignments.read().await.clone()
    }
}

#[async_trait]
impl StoryAssignmentRepository for MemoryStoryAssignmentRepository {
    async fn delete_stories_assignments(
        &self,
        filters: StoryAssignmentFilters,
    ) -> RepositoryResult<u64> {
        reject_unfiltered_delete(&filters)?;

        let stories = self.stories.read().await;
        let memberships = self.memberships.read().await;
        let mut assignments = self.assignments.write().await;

        let matches = |a: &StoryAssignment| {
            let project_id = stories.get(&a.story_id).copied();
            filters.story_id.map_or(true, |id| a.story_id == id)
                && filters.user_id.map_or(true, |id| a.user_id == id)
                && filters
                    .project_id
                    .map_or(true, |id| project_id == Some(id))
                && filters.role_id.map_or(true, |role_id| {
                    memberships.iter().any(|m| {
                        Some(m.project_id) == project_id
                            && m.user_id == a.user_id
                            && m.role_id == role_id
                    })
                })
        };

        let before = assignments.len();
        assignments.retain(|a| !matches(a));
        Ok((before - assignments.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_roles_filtered_and_ordered() {
        let repo = MemoryProjectRoleRepository::new();
        let project_id = Uuid::new_v4();
        let other_project = Uuid::new_v4();

        repo.insert(ProjectRole::new(project_id, "General").with_order(3))
            .await
            .unwrap();
        repo.insert(ProjectRole::admin(project_id)).await.unwrap();
        repo.insert(ProjectRole::new(other_project, "General"))
            .await
            .unwrap();

        let roles = repo
            .get_project_roles(ProjectRoleFilters::new().with_project_id(project_id))
            .await
            .unwrap();
        let slugs: Vec<_> = roles.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["administrator", "general"]);

        let general = repo
            .get_project_role(
                ProjectRoleFilters::new()
                    .with_project_id(other_project)
                    .with_slug("general"),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(general.project_id, other_project);

        let missing = repo
            .get_project_role(
                ProjectRoleFilters::new()
                    .with_project_id(project_id)
                    .with_slug("nobody"),
            )
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let repo = MemoryProjectRoleRepository::new();
        let project_id = Uuid::new_v4();
        repo.insert(ProjectRole::new(project_id, "General"))
            .await
            .unwrap();

        let result = repo.insert(ProjectRole::new(project_id, "general")).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_permissions() {
        let repo = MemoryProjectRoleRepository::new();
        let mut role = repo
            .insert(ProjectRole::new(Uuid::new_v4(), "General").with_permissions(["view_story"]))
            .await
            .unwrap();

        role.permissions = vec!["view_story".to_string(), "add_story".to_string()];
        let updated = repo.update_project_role_permissions(&role).await.unwrap();
        assert_eq!(updated.permissions, role.permissions);

        let unknown = ProjectRole::new(Uuid::new_v4(), "Ghost");
        let result = repo.update_project_role_permissions(&unknown).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_assignments_by_role() {
        let repo = MemoryStoryAssignmentRepository::new();
        let project_id = Uuid::new_v4();
        let other_project = Uuid::new_v4();
        let viewer_role = Uuid::new_v4();
        let editor_role = Uuid::new_v4();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        let (story_a, story_b, foreign_story) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        repo.add_story(story_a, project_id).await;
        repo.add_story(story_b, project_id).await;
        repo.add_story(foreign_story, other_project).await;
        repo.add_membership(ProjectMembership::new(project_id, alice, viewer_role))
            .await;
        repo.add_membership(ProjectMembership::new(project_id, bob, editor_role))
            .await;
        repo.add_membership(ProjectMembership::new(other_project, alice, editor_role))
            .await;

        repo.assign(story_a, alice).await.unwrap();
        repo.assign(story_b, alice).await.unwrap();
        repo.assign(story_a, bob).await.unwrap();
        repo.assign(foreign_story, alice).await.unwrap();

        let deleted = repo
            .delete_stories_assignments(StoryAssignmentFilters::new().with_role_id(viewer_role))
            .await
            .unwrap();
        assert_eq!(deleted, 2);

        let remaining = repo.assignments().await;
        assert_eq!(remaining.len(), 2);
        assert!(remaining
            .iter()
            .any(|a| a.story_id == story_a && a.user_id == bob));
        assert!(remaining
            .iter()
            .any(|a| a.story_id == foreign_story && a.user_id == alice));
    }

    #[tokio::test]
    async fn test_delete_assignments_requires_filters() {
        let repo = MemoryStoryAssignmentRepository::new();
        let story = Uuid::new_v4();
        repo.add_story(story, Uuid::new_v4()).await;
        repo.assign(story, Uuid::new_v4()).await.unwrap();

        let result = repo
            .delete_stories_assignments(StoryAssignmentFilters::new())
            .await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert_eq!(repo.assignments().await.len(), 1);
    }

    #[tokio::test]
    async fn test_assign_unknown_story() {
        let repo = MemoryStoryAssignmentRepository::new();
        let result = repo.assign(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
