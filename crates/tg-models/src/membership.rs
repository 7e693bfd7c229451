//! Project membership model
//!
//! Table: project_memberships

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tg_core::traits::{Entity, Id, Identifiable, ProjectScoped};
use uuid::Uuid;

/// Links a user to a project through exactly one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMembership {
    pub id: Id,
    pub project_id: Id,
    pub user_id: Id,
    pub role_id: Id,
    pub created_at: DateTime<Utc>,
}

impl ProjectMembership {
    pub fn new(project_id: Id, user_id: Id, role_id: Id) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            user_id,
            role_id,
            created_at: Utc::now(),
        }
    }
}

impl Identifiable for ProjectMembership {
    fn id(&self) -> Id {
        self.id
    }
}

impl ProjectScoped for ProjectMembership {
    fn project_id(&self) -> Id {
        self.project_id
    }
}

impl Entity for ProjectMembership {
    const TABLE_NAME: &'static str = "project_memberships";
    const TYPE_NAME: &'static str = "ProjectMembership";
}
