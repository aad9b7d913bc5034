#![allow(dead_code)]

use momento::assistant::{Assistant, Persona};
use momento::config::AssistantConfig;
use momento::db::{self, KeyValueStore, MemoryPreferences, SqlitePreferences};
use momento::entry::{EntryStore, SharedStore};
use std::path::Path;

pub const SAVE_KEY: &str = "saved_entries";

/// A store over an in-memory preference map that starts with no entries
/// (an empty list is saved, so the first-run samples are skipped).
pub fn empty_store() -> EntryStore {
    let mut prefs = MemoryPreferences::new();
    prefs.set(SAVE_KEY, b"[]").unwrap();
    EntryStore::open(Box::new(prefs), SAVE_KEY)
}

/// A store over a fresh in-memory SQLite database (first run: sample entries).
pub fn sqlite_store() -> EntryStore {
    let conn = db::open_memory_database().unwrap();
    EntryStore::open(Box::new(SqlitePreferences::new(conn)), SAVE_KEY)
}

/// Open (or reopen) a store backed by the SQLite file at `path`.
pub fn file_store(path: &Path) -> EntryStore {
    let conn = db::open_database(path).unwrap();
    EntryStore::open(Box::new(SqlitePreferences::new(conn)), SAVE_KEY)
}

/// Assistant config with a short reply delay so tests stay fast.
pub fn fast_config(persona: Persona) -> AssistantConfig {
    AssistantConfig {
        reply_delay_ms: 10,
        default_persona: persona,
    }
}

pub fn assistant_over(store: SharedStore) -> Assistant {
    Assistant::new(store, &fast_config(Persona::Mentor))
}
