use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::assistant::persona::Persona;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MomentoConfig {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// `sqlite` (durable) or `memory` (lost on exit).
    pub backend: String,
    pub db_path: String,
    /// Preference key the entry collection is saved under.
    pub save_key: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    pub default_persona: Persona,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_momento_dir()
            .join("momento.db")
            .to_string_lossy()
            .into_owned();
        Self {
            backend: "sqlite".into(),
            db_path,
            save_key: "saved_entries".into(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            default_persona: Persona::Mentor,
        }
    }
}

impl StorageConfig {
    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.db_path)
    }
}

impl AssistantConfig {
    /// The reply delay, never shorter than one millisecond.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms.max(1))
    }
}

/// Returns `~/.momento/`
pub fn default_momento_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".momento")
}

/// Returns the default config file path: `~/.momento/config.toml`
pub fn default_config_path() -> PathBuf {
    default_momento_dir().join("config.toml")
}

impl MomentoConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            MomentoConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (MOMENTO_DB, MOMENTO_BACKEND, MOMENTO_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MOMENTO_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("MOMENTO_BACKEND") {
            self.storage.backend = val;
        }
        if let Ok(val) = std::env::var("MOMENTO_LOG_LEVEL") {
            self.logging.log_level = val;
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
