//! Change notifications for the entry store and the assistant.
//!
//! Every mutation publishes an event on a [`tokio::sync::broadcast`] channel, so
//! observers see changes without polling. Emitting with no subscribers is fine.

use tokio::sync::broadcast;
use tracing::trace;
use uuid::Uuid;

use crate::assistant::message::Message;
use crate::assistant::persona::Persona;

const DEFAULT_CAPACITY: usize = 256;

/// Emitted by [`EntryStore`](crate::entry::store::EntryStore) after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The collection was (re)loaded; `from_samples` is true on first run.
    Loaded { count: usize, from_samples: bool },
    Added { id: Uuid },
    Updated { id: Uuid },
    Deleted { ids: Vec<Uuid> },
    FavoriteToggled { id: Uuid, is_favorite: bool },
}

/// Emitted by [`Assistant`](crate::assistant::engine::Assistant) on every state change.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantEvent {
    MessageAppended(Message),
    PersonaChanged(Persona),
    ProcessingChanged(bool),
    TranscriptCleared,
}

/// Broadcast fan-out for one event type.
#[derive(Debug, Clone)]
pub struct EventBus<E> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone + std::fmt::Debug> EventBus<E> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emit an event to all current subscribers.
    pub fn emit(&self, event: E) {
        trace!(event = ?event, "emitting event");
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<E: Clone + std::fmt::Debug> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
