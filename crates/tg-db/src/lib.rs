//! # tg-db
//!
//! Database layer for Taiga RS.
//!
//! This crate provides:
//!
//! - Repository traits consumed by the services (the persistence ports)
//! - Typed filter criteria for those repositories
//! - PostgreSQL implementations using SQLx
//! - In-memory implementations for development and tests
//! - Connection pool bootstrap
//!
//! ## Example
//!
//! ```ignore
//! use tg_db::{Database, ProjectRoleFilters, ProjectRoleRepository};
//!
//! let db = Database::connect(&config.database).await?;
//! let roles = db.role_repository();
//! let filters = ProjectRoleFilters::new()
//!     .with_project_id(project.id)
//!     .with_slug("general");
//! let role = roles.get_project_role(filters).await?;
//! ```

pub mod pool;
pub mod filters;
pub mod repository;
pub mod project_roles;
pub mod story_assignments;
pub mod memory;

// Re-exports
pub use pool::Database;
pub use filters::{ProjectRoleFilters, StoryAssignmentFilters};
pub use repository::{
    ProjectRoleRepository, RepositoryError, RepositoryResult, StoryAssignmentRepository,
};
#[cfg(any(test, feature = "mock"))]
pub use repository::{MockProjectRoleRepository, MockStoryAssignmentRepository};
pub use project_roles::{PgProjectRoleRepository, ProjectRoleRow};
pub use story_assignments::PgStoryAssignmentRepository;
pub use memory::{MemoryProjectRoleRepository, MemoryStoryAssignmentRepository};
