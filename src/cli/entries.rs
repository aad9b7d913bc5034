//! CLI entry commands — add, list, show, edit, favorite, delete.

use anyhow::{bail, Context, Result};
use momento::config::MomentoConfig;
use momento::entry::{Category, ContentType, Entry, EntryFilter, Source};

use super::{entry_line, open_store, resolve_id};

/// Field values for `momento add`.
pub struct NewEntry {
    pub content: String,
    pub content_type: ContentType,
    pub source: Source,
    pub category: Category,
    pub context: Option<String>,
    pub media_url: Option<String>,
    pub favorite: bool,
}

/// Fields to overwrite in `momento edit`; `None` keeps the current value.
pub struct EntryChanges {
    pub content: Option<String>,
    pub content_type: Option<ContentType>,
    pub source: Option<Source>,
    pub category: Option<Category>,
    pub context: Option<String>,
    pub media_url: Option<String>,
}

pub fn add(config: &MomentoConfig, new: NewEntry) -> Result<()> {
    if new.content.trim().is_empty() {
        bail!("content must not be empty");
    }

    let mut entry = Entry::new(new.content)
        .with_content_type(new.content_type)
        .with_source(new.source)
        .with_category(new.category);
    entry.context = new.context;
    entry.media_url = new.media_url;
    entry.is_favorite = new.favorite;

    let mut store = open_store(config)?;
    let id = store.add(entry);
    println!("Added {id}");
    Ok(())
}

pub fn list(config: &MomentoConfig, filter: EntryFilter) -> Result<()> {
    let store = open_store(config)?;
    let entries = store.filtered(&filter);

    if entries.is_empty() {
        if filter.is_empty() {
            println!("No entries yet. Add one with `momento add`.");
        } else {
            println!("No entries match the filter.");
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry_line(entry));
    }
    println!();
    println!("{} of {} entries", entries.len(), store.len());
    Ok(())
}

pub fn show(config: &MomentoConfig, id: &str) -> Result<()> {
    let store = open_store(config)?;
    let id = resolve_id(&store, id)?;
    let entry = store
        .get(id)
        .with_context(|| format!("no entry with id {id}"))?;

    println!("Entry: {}", entry.id);
    println!("{}", "=".repeat(50));
    println!("  Type:        {}", entry.content_type.label());
    println!("  Source:      {}", entry.source.label());
    println!("  Category:    {}", entry.category.label());
    println!("  Favorite:    {}", if entry.is_favorite { "yes" } else { "no" });
    println!("  Created:     {}", entry.created_at.to_rfc3339());
    println!("  Updated:     {}", entry.updated_at.to_rfc3339());
    if let Some(ref media) = entry.media_url {
        println!("  Media:       {media}");
    }
    println!();
    println!("Content:");
    println!("  {}", entry.content);
    if let Some(ref context) = entry.context {
        println!();
        println!("Context:");
        println!("  {context}");
    }
    Ok(())
}

pub fn edit(config: &MomentoConfig, id: &str, changes: EntryChanges) -> Result<()> {
    let mut store = open_store(config)?;
    let id = resolve_id(&store, id)?;
    let mut entry = store
        .get(id)
        .cloned()
        .with_context(|| format!("no entry with id {id}"))?;

    if let Some(content) = changes.content {
        if content.trim().is_empty() {
            bail!("content must not be empty");
        }
        entry.content = content;
    }
    if let Some(content_type) = changes.content_type {
        entry.content_type = content_type;
    }
    if let Some(source) = changes.source {
        entry.source = source;
    }
    if let Some(category) = changes.category {
        entry.category = category;
    }
    if changes.context.is_some() {
        entry.context = changes.context.filter(|c| !c.is_empty());
    }
    if changes.media_url.is_some() {
        entry.media_url = changes.media_url.filter(|m| !m.is_empty());
    }

    if !store.update(entry) {
        bail!("no entry with id {id}");
    }
    println!("Updated {id}");
    Ok(())
}

pub fn favorite(config: &MomentoConfig, id: &str) -> Result<()> {
    let mut store = open_store(config)?;
    let id = resolve_id(&store, id)?;
    match store.toggle_favorite(id) {
        Some(true) => println!("Marked {id} as favorite"),
        Some(false) => println!("Removed {id} from favorites"),
        None => bail!("no entry with id {id}"),
    }
    Ok(())
}

pub fn delete(config: &MomentoConfig, ids: &[String]) -> Result<()> {
    let mut store = open_store(config)?;
    let resolved = ids
        .iter()
        .map(|id| resolve_id(&store, id))
        .collect::<Result<Vec<_>>>()?;

    let mut deleted = 0;
    for id in resolved {
        if store.delete(id) {
            deleted += 1;
        } else {
            eprintln!("No entry with id {id}");
        }
    }
    println!("Deleted {deleted} entr{}.", if deleted == 1 { "y" } else { "ies" });
    Ok(())
}
