//! Story assignment model
//!
//! Table: story_assignments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tg_core::traits::{Entity, Id, Identifiable};
use uuid::Uuid;

/// A user assigned to a story.
///
/// The assignee reaches the story through their membership role in the
/// story's project, so an assignment is tied to that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAssignment {
    pub id: Id,
    pub story_id: Id,
    pub user_id: Id,
    pub created_at: DateTime<Utc>,
}

impl StoryAssignment {
    pub fn new(story_id: Id, user_id: Id) -> Self {
        Self {
            id: Uuid::new_v4(),
            story_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

impl Identifiable for StoryAssignment {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for StoryAssignment {
    const TABLE_NAME: &'static str = "story_assignments";
    const TYPE_NAME: &'static str = "StoryAssignment";
}
