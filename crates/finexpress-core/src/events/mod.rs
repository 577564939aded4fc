//! Domain events emitted by FineXpress operations.
//!
//! Events are dispatched through the [`EventBus`] and consumed by the
//! excluded presentation and notification layers. The core only
//! guarantees that every applied mutation publishes exactly one event;
//! delivery to end users is out of scope.

pub mod fine;
pub mod offense;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

pub use fine::FineEvent;
pub use offense::OffenseEvent;

use crate::types::ActorId;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The actor who caused the event.
    pub actor_id: ActorId,
    /// The event payload.
    pub payload: EventPayload,
}

impl DomainEvent {
    /// Wrap a payload with fresh metadata.
    pub fn new(actor_id: ActorId, timestamp: DateTime<Utc>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            actor_id,
            payload,
        }
    }
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum EventPayload {
    /// A fine-related event.
    Fine(FineEvent),
    /// An offense-catalog event.
    Offense(OffenseEvent),
}

/// Default broadcast buffer size.
const DEFAULT_BUFFER: usize = 256;

/// In-process broadcast bus for domain events.
///
/// Publishing never blocks; if no subscriber is attached the event is
/// dropped, which is the correct behavior for an optional listener.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus with the given buffer size.
    pub fn with_buffer(buffer: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: DomainEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to all subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_buffer(DEFAULT_BUFFER)
    }
}
