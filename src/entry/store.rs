//! The durable entry collection.
//!
//! [`EntryStore`] owns the ordered list of entries. It loads the whole collection from
//! one preference slot on construction and writes the whole collection back after
//! every mutation. Persistence is best-effort: storage failures are logged and
//! swallowed. A missing slot is seeded with the built-in sample entries, and
//! unreadable data falls back to them without being overwritten.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::filter::EntryFilter;
use super::types::{sample_entries, Category, Entry};
use crate::config::StorageConfig;
use crate::db::{create_store, KeyValueStore};
use crate::events::{EventBus, StoreEvent};

/// The store as shared between the UI layer and the assistant.
pub type SharedStore = Arc<Mutex<EntryStore>>;

pub struct EntryStore {
    prefs: Box<dyn KeyValueStore>,
    save_key: String,
    entries: Vec<Entry>,
    events: EventBus<StoreEvent>,
}

impl EntryStore {
    /// Build a store over `prefs` and load the collection saved under `save_key`.
    pub fn open(prefs: Box<dyn KeyValueStore>, save_key: impl Into<String>) -> Self {
        let mut store = Self {
            prefs,
            save_key: save_key.into(),
            entries: Vec::new(),
            events: EventBus::new(),
        };
        store.load();
        store
    }

    /// Open the configured backend and load the collection from it.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let prefs = create_store(config)?;
        Ok(Self::open(prefs, config.save_key.clone()))
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Give back the underlying preference store (e.g. to reopen it later).
    pub fn into_preferences(self) -> Box<dyn KeyValueStore> {
        self.prefs
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// The current collection, in order.
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries passing `filter`, in collection order.
    pub fn filtered(&self, filter: &EntryFilter) -> Vec<&Entry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }

    /// Append `entry` to the end of the collection. Returns its id.
    pub fn add(&mut self, entry: Entry) -> Uuid {
        let id = entry.id;
        debug!(%id, category = %entry.category, source = %entry.source, "adding entry");
        self.entries.push(entry);
        self.persist();
        self.events.emit(StoreEvent::Added { id });
        id
    }

    /// Replace the stored entry that has `entry.id`.
    ///
    /// The stored `created_at` is kept and `updated_at` is refreshed. Returns `false`
    /// (and changes nothing) when no entry has that id.
    pub fn update(&mut self, entry: Entry) -> bool {
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == entry.id) else {
            debug!(id = %entry.id, "update ignored: entry not found");
            return false;
        };

        let created_at = slot.created_at;
        *slot = entry;
        slot.created_at = created_at;
        slot.touch();

        let id = slot.id;
        self.persist();
        self.events.emit(StoreEvent::Updated { id });
        true
    }

    /// Remove every entry with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            debug!(%id, "delete ignored: entry not found");
            return false;
        }

        self.persist();
        self.events.emit(StoreEvent::Deleted { ids: vec![id] });
        true
    }

    /// Remove the entries at `positions` of the current order.
    ///
    /// Duplicate and out-of-range positions are ignored. Returns how many entries
    /// were removed.
    pub fn delete_at(&mut self, positions: &[usize]) -> usize {
        let mut positions: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&p| p < self.entries.len())
            .collect();
        positions.sort_unstable();
        positions.dedup();

        if positions.is_empty() {
            return 0;
        }

        // Highest first so earlier positions stay valid
        let mut ids: Vec<Uuid> = positions
            .iter()
            .rev()
            .map(|&p| self.entries.remove(p).id)
            .collect();
        ids.reverse();

        let removed = ids.len();
        self.persist();
        self.events.emit(StoreEvent::Deleted { ids });
        removed
    }

    /// Flip the favorite flag. Returns the new value, or `None` if `id` is unknown.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Option<bool> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            debug!(%id, "favorite toggle ignored: entry not found");
            return None;
        };

        entry.is_favorite = !entry.is_favorite;
        entry.touch();
        let is_favorite = entry.is_favorite;

        self.persist();
        self.events.emit(StoreEvent::FavoriteToggled { id, is_favorite });
        Some(is_favorite)
    }

    /// Write the whole collection to the preference slot. Failures are logged only.
    pub fn persist(&mut self) {
        let encoded = match serde_json::to_vec(&self.entries) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "failed to encode entries; not saved");
                return;
            }
        };

        if let Err(e) = self.prefs.set(&self.save_key, &encoded) {
            warn!(key = %self.save_key, error = %e, "failed to save entries");
        }
    }

    /// Replace the in-memory collection with what is saved, or with the samples
    /// when nothing readable is saved. Samples loaded for a missing slot are written
    /// back at once so their ids survive a restart; unreadable data is left in place.
    pub fn load(&mut self) {
        let from_samples = match self.read_saved() {
            Saved::Entries(entries) => {
                self.entries = entries;
                false
            }
            Saved::Missing => {
                self.entries = sample_entries();
                self.persist();
                true
            }
            Saved::Unreadable => {
                self.entries = sample_entries();
                true
            }
        };

        info!(count = self.entries.len(), from_samples, "entries loaded");
        self.events.emit(StoreEvent::Loaded {
            count: self.entries.len(),
            from_samples,
        });
    }

    fn read_saved(&self) -> Saved {
        let bytes = match self.prefs.get(&self.save_key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Saved::Missing,
            Err(e) => {
                warn!(key = %self.save_key, error = %e, "failed to read saved entries");
                return Saved::Unreadable;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => Saved::Entries(entries),
            Err(e) => {
                warn!(key = %self.save_key, error = %e, "saved entries are unreadable");
                Saved::Unreadable
            }
        }
    }
}

enum Saved {
    Entries(Vec<Entry>),
    Missing,
    Unreadable,
}
