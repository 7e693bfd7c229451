//! Event publishers

use async_trait::async_trait;
use tg_core::config::EventsConfig;
use tg_core::error::TgError;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::event::Event;

/// Event publishing errors
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Publish failed: {0}")]
    Publish(String),
    #[error("Channel capacity must be greater than zero")]
    ZeroCapacity,
}

pub type EventResult<T> = Result<T, EventError>;

impl From<EventError> for TgError {
    fn from(err: EventError) -> Self {
        TgError::Events(err.to_string())
    }
}

/// Delivers events to whoever listens on their channel
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: Event) -> EventResult<()>;
}

/// In-process publisher backed by a tokio broadcast channel.
///
/// Publishing never waits on subscribers. A subscriber that falls more than
/// `channel_capacity` events behind loses the oldest ones.
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<Event>,
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> EventResult<Self> {
        if capacity == 0 {
            return Err(EventError::ZeroCapacity);
        }
        let (sender, _) = broadcast::channel(capacity);
        Ok(Self { sender })
    }

    pub fn from_config(config: &EventsConfig) -> EventResult<Self> {
        Self::new(config.channel_capacity)
    }

    /// Receive every event published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl EventPublisher for BroadcastEventPublisher {
    async fn publish(&self, event: Event) -> EventResult<()> {
        let channel = event.channel.clone();
        let event_type = event.event_type.clone();
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(%channel, %event_type, receivers, "Event published");
            }
            // No live subscribers; nothing to deliver to.
            Err(_) => {
                tracing::debug!(%channel, %event_type, "Event dropped, no subscribers");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event::new("projects.1", "projectroles.update", serde_json::json!({}))
    }

    #[tokio::test]
    async fn test_publish_reaches_all_subscribers() {
        let publisher = BroadcastEventPublisher::new(8).unwrap();
        let mut first = publisher.subscribe();
        let mut second = publisher.subscribe();
        assert_eq!(publisher.subscriber_count(), 2);

        publisher.publish(event()).await.unwrap();

        assert_eq!(first.recv().await.unwrap().event_type, "projectroles.update");
        assert_eq!(second.recv().await.unwrap().channel, "projects.1");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_succeeds() {
        let publisher = BroadcastEventPublisher::from_config(&EventsConfig::default()).unwrap();
        assert_eq!(publisher.subscriber_count(), 0);
        assert!(publisher.publish(event()).await.is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            BroadcastEventPublisher::new(0),
            Err(EventError::ZeroCapacity)
        ));

        let config = EventsConfig {
            channel_capacity: 0,
        };
        assert!(BroadcastEventPublisher::from_config(&config).is_err());
    }

    #[test]
    fn test_into_tg_error() {
        let err: TgError = EventError::Publish("bus down".into()).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "events_error");
    }
}
