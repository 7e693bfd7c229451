//! Project role events

use std::sync::Arc;

use async_trait::async_trait;
use tg_models::ProjectRole;

use crate::event::{project_channel, Event};
use crate::publisher::{EventPublisher, EventResult};

/// Sent on the project channel after a role's permissions change
pub const UPDATE_PROJECT_ROLE_PERMISSIONS: &str = "projectroles.update";

/// Announces changes to project roles
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProjectRoleEvents: Send + Sync {
    async fn emit_event_when_project_role_permissions_are_updated(
        &self,
        role: &ProjectRole,
    ) -> EventResult<()>;
}

/// [`ProjectRoleEvents`] on top of any [`EventPublisher`]
pub struct ProjectRoleEventEmitter<P: EventPublisher> {
    publisher: Arc<P>,
}

impl<P: EventPublisher> ProjectRoleEventEmitter<P> {
    pub fn new(publisher: Arc<P>) -> Self {
        Self { publisher }
    }
}

#[async_trait]
impl<P: EventPublisher> ProjectRoleEvents for ProjectRoleEventEmitter<P> {
    async fn emit_event_when_project_role_permissions_are_updated(
        &self,
        role: &ProjectRole,
    ) -> EventResult<()> {
        let content = serde_json::to_value(role)?;
        let event = Event::new(
            project_channel(role.project_id),
            UPDATE_PROJECT_ROLE_PERMISSIONS,
            content,
        );
        self.publisher.publish(event).await
    }
}
