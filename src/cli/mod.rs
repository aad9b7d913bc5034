pub mod chat;
pub mod entries;
pub mod stats;

use anyhow::{bail, Result};
use momento::config::MomentoConfig;
use momento::entry::{Entry, EntryStore};
use uuid::Uuid;

/// Open the configured entry store.
pub fn open_store(config: &MomentoConfig) -> Result<EntryStore> {
    EntryStore::from_config(&config.storage)
}

/// Resolve a full id or a unique prefix of one (e.g. the 8 characters `list` prints).
pub fn resolve_id(store: &EntryStore, id: &str) -> Result<Uuid> {
    if let Ok(id) = id.parse::<Uuid>() {
        return Ok(id);
    }

    let prefix = id.to_lowercase();
    let candidates: Vec<Uuid> = store
        .list()
        .iter()
        .map(|e| e.id)
        .filter(|uuid| uuid.to_string().starts_with(&prefix))
        .collect();

    match candidates.as_slice() {
        [only] => Ok(*only),
        [] => bail!("no entry matches id {id}"),
        _ => bail!("id prefix {id} is ambiguous ({} entries)", candidates.len()),
    }
}

/// One-line listing: short id, favorite marker, tags and a content preview.
pub fn entry_line(entry: &Entry) -> String {
    let id = entry.id.to_string();
    let star = if entry.is_favorite { "*" } else { " " };
    format!(
        "{} {} [{} / {}] {}",
        &id[..8],
        star,
        entry.category.label(),
        entry.source.label(),
        preview(&entry.content, 60),
    )
}

/// Truncate to `max_chars` characters, appending "..." if truncated.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let cut: String = content.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
