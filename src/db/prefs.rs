//! Key-value preference storage.
//!
//! Provides the [`KeyValueStore`] trait and two implementations: [`SqlitePreferences`]
//! (durable, one row per key in the `preferences` table) and [`MemoryPreferences`]
//! (process-local). The backend is chosen via [`create_store`] from configuration.

use anyhow::{bail, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

use crate::config::StorageConfig;

/// A flat store of opaque values addressed by string keys.
///
/// Writes replace the whole value for a key.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

/// Preferences backed by the SQLite `preferences` table.
pub struct SqlitePreferences {
    conn: Connection,
}

impl SqlitePreferences {
    /// Wrap a connection whose schema has already been initialized.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqlitePreferences {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

/// Preferences held in a `HashMap`; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.values.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Create a preference store from config.
///
/// `"sqlite"` opens (or creates) the database at `db_path`; `"memory"` keeps
/// everything in process.
pub fn create_store(config: &StorageConfig) -> Result<Box<dyn KeyValueStore>> {
    match config.backend.as_str() {
        "sqlite" => {
            let conn = super::open_database(config.resolved_db_path())?;
            Ok(Box::new(SqlitePreferences::new(conn)))
        }
        "memory" => Ok(Box::new(MemoryPreferences::new())),
        other => bail!("unknown storage backend: {other}. Supported: sqlite, memory"),
    }
}
