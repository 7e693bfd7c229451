//! # tg-events
//!
//! Domain event publishing for Taiga RS.
//!
//! ## Features
//!
//! - Serializable event envelope addressed to a channel
//! - In-process broadcast publisher
//! - Project role events (permission updates)

pub mod event;
pub mod publisher;
pub mod project_roles;

pub use event::{project_channel, Event};
pub use publisher::{BroadcastEventPublisher, EventError, EventPublisher, EventResult};
#[cfg(any(test, feature = "mock"))]
pub use publisher::MockEventPublisher;
pub use project_roles::{
    ProjectRoleEventEmitter, ProjectRoleEvents, UPDATE_PROJECT_ROLE_PERMISSIONS,
};
#[cfg(any(test, feature = "mock"))]
pub use project_roles::MockProjectRoleEvents;
