//! Event envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tg_core::traits::Id;

/// A domain event addressed to a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Channel subscribers listen on, e.g. `projects.<id>`
    pub channel: String,
    /// Dotted event name, e.g. `projectroles.update`
    #[serde(rename = "type")]
    pub event_type: String,
    pub content: serde_json::Value,
    pub emitted_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        channel: impl Into<String>,
        event_type: impl Into<String>,
        content: serde_json::Value,
    ) -> Self {
        Self {
            channel: channel.into(),
            event_type: event_type.into(),
            content,
            emitted_at: Utc::now(),
        }
    }
}

/// Channel shared by everyone watching a project
pub fn project_channel(project_id: Id) -> String {
    format!("projects.{}", project_id)
}
