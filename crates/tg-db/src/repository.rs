//! Repository traits consumed by the services

use async_trait::async_trait;
use tg_core::error::TgError;
use tg_models::ProjectRole;

use crate::filters::{ProjectRoleFilters, StoryAssignmentFilters};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for TgError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(message) => TgError::NotFound(message),
            RepositoryError::Validation(message) => {
                let mut errors = tg_core::ValidationErrors::new();
                errors.add_base(message);
                TgError::Validation(errors)
            }
            RepositoryError::Conflict(message) => TgError::Conflict { message },
            RepositoryError::Database(e) => TgError::Database(e.to_string()),
        }
    }
}

/// Read and write access to project roles
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProjectRoleRepository: Send + Sync {
    /// All roles matching the filters, ordered by position
    async fn get_project_roles(
        &self,
        filters: ProjectRoleFilters,
    ) -> RepositoryResult<Vec<ProjectRole>>;

    /// The first role matching the filters, if any
    async fn get_project_role(
        &self,
        filters: ProjectRoleFilters,
    ) -> RepositoryResult<Option<ProjectRole>>;

    /// Store `role.permissions` and return the persisted role
    async fn update_project_role_permissions(
        &self,
        role: &ProjectRole,
    ) -> RepositoryResult<ProjectRole>;
}

/// Write access to story assignments
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait StoryAssignmentRepository: Send + Sync {
    /// Delete every assignment matching the filters and return how many went.
    ///
    /// Empty filters are rejected with [`RepositoryError::Validation`].
    async fn delete_stories_assignments(
        &self,
        filters: StoryAssignmentFilters,
    ) -> RepositoryResult<u64>;
}

pub(crate) fn reject_unfiltered_delete(filters: &StoryAssignmentFilters) -> RepositoryResult<()> {
    if filters.is_empty() {
        return Err(RepositoryError::Validation(
            "Refusing to delete story assignments without filters".to_string(),
        ));
    }
    Ok(())
}
