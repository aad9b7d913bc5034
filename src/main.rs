mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use momento::assistant::Persona;
use momento::config::MomentoConfig;
use momento::entry::{Category, ContentType, Source};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "momento", version, about = "Personal wisdom journal with a scripted assistant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a new entry
    Add {
        content: String,
        #[arg(long = "type", default_value = "text")]
        content_type: ContentType,
        #[arg(long, default_value = "self_written")]
        source: Source,
        #[arg(long, default_value = "other")]
        category: Category,
        /// Where or when this wisdom was found
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        media_url: Option<String>,
        #[arg(long)]
        favorite: bool,
    },
    /// List entries, optionally filtered
    List {
        /// Case-insensitive text to look for in the content
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        source: Option<Source>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        favorites: bool,
    },
    /// Show one entry in full
    Show { id: String },
    /// Change fields of an existing entry
    Edit {
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long = "type")]
        content_type: Option<ContentType>,
        #[arg(long)]
        source: Option<Source>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        media_url: Option<String>,
    },
    /// Mark or unmark an entry as favorite
    Favorite { id: String },
    /// Delete one or more entries
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show collection statistics
    Stats,
    /// Show today's wisdom
    Today,
    /// Summarize what kind of wisdom you collect
    Analyze,
    /// Talk to the assistant
    Chat {
        #[arg(long)]
        persona: Option<Persona>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MomentoConfig::load()?;

    // Log to stderr so command output stays clean.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add {
            content,
            content_type,
            source,
            category,
            context,
            media_url,
            favorite,
        } => cli::entries::add(
            &config,
            cli::entries::NewEntry {
                content,
                content_type,
                source,
                category,
                context,
                media_url,
                favorite,
            },
        )?,
        Command::List {
            search,
            source,
            category,
            favorites,
        } => cli::entries::list(
            &config,
            momento::entry::EntryFilter {
                query: search,
                source,
                category,
                favorites_only: favorites,
            },
        )?,
        Command::Show { id } => cli::entries::show(&config, &id)?,
        Command::Edit {
            id,
            content,
            content_type,
            source,
            category,
            context,
            media_url,
        } => cli::entries::edit(
            &config,
            &id,
            cli::entries::EntryChanges {
                content,
                content_type,
                source,
                category,
                context,
                media_url,
            },
        )?,
        Command::Favorite { id } => cli::entries::favorite(&config, &id)?,
        Command::Delete { ids } => cli::entries::delete(&config, &ids)?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Today => cli::stats::today(&config)?,
        Command::Analyze => cli::chat::analyze(&config)?,
        Command::Chat { persona } => cli::chat::chat(&config, persona).await?,
    }

    Ok(())
}
