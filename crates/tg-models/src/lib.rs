//! # tg-models
//!
//! Domain models for Taiga RS.
//!
//! Each model implements the core traits from `tg-core` (Entity, Identifiable, ProjectScoped).

pub use tg_core::traits::{Entity, Id, Identifiable, ProjectScoped};

pub mod project;
pub mod role;
pub mod membership;
pub mod assignment;

pub use project::Project;
pub use role::{permissions, ProjectRole};
pub use membership::ProjectMembership;
pub use assignment::StoryAssignment;
