//! Project model
//!
//! Table: projects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tg_core::traits::{Entity, Id, Identifiable};
use uuid::Uuid;

/// Project entity. Owns the roles its members are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Identifiable for Project {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Project {
    const TABLE_NAME: &'static str = "projects";
    const TYPE_NAME: &'static str = "Project";
}
