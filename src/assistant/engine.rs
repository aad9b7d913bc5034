//! The scripted assistant.
//!
//! [`Assistant`] keeps the active persona and the in-memory transcript. A submitted
//! message is appended at once; the reply follows after `reply_delay` on a spawned
//! task. Replies are chained so they land in submission order even when the caller
//! submits again before the previous reply arrived.

use anyhow::{Context, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{broadcast, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::matcher::find_matches;
use super::message::Message;
use super::persona::Persona;
use super::templates;
use crate::config::AssistantConfig;
use crate::entry::store::SharedStore;
use crate::entry::types::Entry;
use crate::events::{AssistantEvent, EventBus};

struct Conversation {
    persona: Persona,
    messages: Vec<Message>,
    /// Replies scheduled but not yet appended.
    pending: usize,
    /// Completion signal of the most recently scheduled reply.
    last_reply: Option<oneshot::Receiver<()>>,
}

/// Persona-flavored keyword assistant over a shared [`EntryStore`](crate::entry::EntryStore).
#[derive(Clone)]
pub struct Assistant {
    store: SharedStore,
    state: Arc<Mutex<Conversation>>,
    events: EventBus<AssistantEvent>,
    reply_delay: Duration,
}

/// A reply that has been scheduled by [`Assistant::submit`].
pub struct PendingReply {
    handle: JoinHandle<Message>,
}

impl PendingReply {
    /// Wait for the reply to be appended to the transcript and return it.
    pub async fn wait(self) -> Result<Message> {
        self.handle.await.context("reply task failed")
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Assistant {
    /// Create an assistant whose transcript starts with the greeting.
    pub fn new(store: SharedStore, config: &AssistantConfig) -> Self {
        let assistant = Self {
            store,
            state: Arc::new(Mutex::new(Conversation {
                persona: config.default_persona,
                messages: Vec::new(),
                pending: 0,
                last_reply: None,
            })),
            events: EventBus::new(),
            reply_delay: config.reply_delay(),
        };
        assistant.append(Message::system(templates::GREETING));
        assistant
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AssistantEvent> {
        self.events.subscribe()
    }

    pub fn current_persona(&self) -> Persona {
        lock(&self.state).persona
    }

    pub fn is_processing(&self) -> bool {
        lock(&self.state).pending > 0
    }

    /// A copy of the transcript, oldest first.
    pub fn transcript(&self) -> Vec<Message> {
        lock(&self.state).messages.clone()
    }

    /// Switch persona and announce it with one system message.
    pub fn change_persona(&self, persona: Persona) {
        lock(&self.state).persona = persona;
        info!(%persona, "persona changed");
        self.events.emit(AssistantEvent::PersonaChanged(persona));
        self.append(Message::system(templates::persona_switched(persona)));
    }

    /// Drop every message, greeting included.
    pub fn clear_transcript(&self) {
        lock(&self.state).messages.clear();
        self.events.emit(AssistantEvent::TranscriptCleared);
    }

    /// Record `text` as a user message and schedule the reply.
    ///
    /// The user message and the match snapshot are taken before this returns; the
    /// reply is built with whatever persona is active when the delay elapses.
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, text: &str) -> PendingReply {
        let matches: Vec<Entry> = {
            let store = lock(&self.store);
            find_matches(store.list(), text)
                .into_iter()
                .cloned()
                .collect()
        };
        debug!(matches = matches.len(), "message submitted");

        self.append(Message::user(text));

        let (done_tx, done_rx) = oneshot::channel();
        let (previous, started) = {
            let mut state = lock(&self.state);
            state.pending += 1;
            (state.last_reply.replace(done_rx), state.pending == 1)
        };
        if started {
            self.events.emit(AssistantEvent::ProcessingChanged(true));
        }

        let assistant = self.clone();
        let handle = tokio::spawn(async move {
            if let Some(previous) = previous {
                // A dropped sender means the earlier reply task died; carry on
                let _ = previous.await;
            }
            tokio::time::sleep(assistant.reply_delay).await;
            let reply = assistant.finish_reply(&matches);
            let _ = done_tx.send(());
            reply
        });

        PendingReply { handle }
    }

    /// Analysis of the whole collection's most common category and source.
    pub fn analyze(&self) -> String {
        let store = lock(&self.store);
        templates::analysis(store.list())
    }

    /// Entries referenced by `message` that still exist, in collection order.
    pub fn related_entries(&self, message: &Message) -> Vec<Entry> {
        let ids = message.related_ids();
        if ids.is_empty() {
            return Vec::new();
        }
        let store = lock(&self.store);
        store
            .list()
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect()
    }

    fn finish_reply(&self, matches: &[Entry]) -> Message {
        let persona = self.current_persona();
        let content = templates::reply(persona, matches.first());
        let reply = Message::reply(content, matches.iter().map(|e| e.id).collect());
        self.append(reply.clone());

        let idle = {
            let mut state = lock(&self.state);
            state.pending = state.pending.saturating_sub(1);
            state.pending == 0
        };
        if idle {
            self.events.emit(AssistantEvent::ProcessingChanged(false));
        }

        debug!(%persona, related = matches.len(), "reply appended");
        reply
    }

    fn append(&self, message: Message) {
        lock(&self.state).messages.push(message.clone());
        self.events.emit(AssistantEvent::MessageAppended(message));
    }
}
