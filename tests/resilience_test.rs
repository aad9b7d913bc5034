mod helpers;

use helpers::{file_store, SAVE_KEY};
use momento::config::StorageConfig;
use momento::db::{self, KeyValueStore, SqlitePreferences};
use momento::entry::{EntryStore, Source};
use tempfile::TempDir;

#[test]
fn open_creates_new_db_at_nonexistent_path() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("subdir").join("new.db");

    assert!(!db_path.exists());

    let conn = db::open_database(&db_path).unwrap();

    assert!(db_path.exists());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn busy_timeout_is_set() {
    let tmp = TempDir::new().unwrap();
    let conn = db::open_database(tmp.path().join("test.db")).unwrap();

    let timeout: i64 = conn
        .pragma_query_value(None, "busy_timeout", |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 5000);
}

#[test]
fn corrupt_blob_falls_back_to_samples() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("journal.db");

    let mut prefs = SqlitePreferences::new(db::open_database(&path).unwrap());
    prefs.set(SAVE_KEY, b"\x00\x01 definitely not json").unwrap();
    drop(prefs);

    let store = file_store(&path);
    assert_eq!(store.len(), 3);
    assert_eq!(store.list()[0].source, Source::Quote);
}

#[test]
fn sample_ids_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("journal.db");

    let first_run: Vec<_> = file_store(&path).list().iter().map(|e| e.id).collect();
    assert_eq!(first_run.len(), 3);

    // Simulated restart
    let mut reopened = file_store(&path);
    let listed: Vec<_> = reopened.list().iter().map(|e| e.id).collect();
    assert_eq!(listed, first_run);
    assert_eq!(reopened.toggle_favorite(first_run[0]), Some(true));
}

#[test]
fn corrupt_blob_is_not_overwritten_on_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("journal.db");

    let mut prefs = SqlitePreferences::new(db::open_database(&path).unwrap());
    prefs.set(SAVE_KEY, b"{truncated").unwrap();
    drop(prefs);

    let prefs = file_store(&path).into_preferences();
    assert_eq!(prefs.get(SAVE_KEY).unwrap().unwrap(), b"{truncated".to_vec());
}

#[test]
fn separate_save_keys_do_not_share_entries() {
    let conn = db::open_memory_database().unwrap();
    let mut prefs = SqlitePreferences::new(conn);
    prefs.set("journal_a", b"[]").unwrap();

    let mut store = EntryStore::open(Box::new(prefs), "journal_a");
    store.add(momento::entry::Entry::new("only in a"));

    let prefs = store.into_preferences();
    assert!(prefs.get("journal_b").unwrap().is_none());
}

#[test]
fn from_config_with_memory_backend_starts_with_samples() {
    let config = StorageConfig {
        backend: "memory".into(),
        ..StorageConfig::default()
    };
    let store = EntryStore::from_config(&config).unwrap();
    assert_eq!(store.len(), 3);
}
