//! # tg-services
//!
//! Business logic services for Taiga RS.
//!
//! Services are stateless orchestration over the repository and event
//! ports; every collaborator is injected, so hosts choose PostgreSQL or
//! in-memory storage and any event transport.

pub mod error;
pub mod roles;

pub use error::{NonEditableRoleError, RoleServiceError, RoleServiceResult};
pub use roles::ProjectRoleService;
