use anyhow::Result;
use momento::config::MomentoConfig;
use momento::entry::stats::{daily_pick, entry_stats};

use super::open_store;

/// Display collection statistics in the terminal.
pub fn stats(config: &MomentoConfig) -> Result<()> {
    let store = open_store(config)?;
    let response = entry_stats(store.list());

    println!("Journal Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total entries:       {}", response.total);
    println!("  Favorites:           {}", response.favorites);
    println!();

    println!("By Category:");
    for (category, count) in &response.by_category {
        println!("  {:<14} {}", category.as_str(), count);
    }
    println!();

    println!("By Source:");
    for (source, count) in &response.by_source {
        println!("  {:<14} {}", source.as_str(), count);
    }
    println!();

    if let Some(ref oldest) = response.oldest {
        println!("Oldest entry:          {}", oldest.to_rfc3339());
    }
    if let Some(ref newest) = response.newest {
        println!("Newest entry:          {}", newest.to_rfc3339());
    }

    Ok(())
}

/// Print today's wisdom.
pub fn today(config: &MomentoConfig) -> Result<()> {
    let store = open_store(config)?;
    let day = chrono::Local::now().date_naive();

    match daily_pick(store.list(), day) {
        Some(entry) => {
            println!("Today's wisdom ({day}):");
            println!();
            println!("  {}", entry.content);
            if let Some(ref context) = entry.context {
                println!("  — {context}");
            }
            println!();
            println!("  [{} / {}]", entry.category.label(), entry.source.label());
        }
        None => println!("No entries yet. Add one with `momento add`."),
    }
    Ok(())
}
