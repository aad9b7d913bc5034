pub mod filter;
pub mod stats;
pub mod store;
pub mod types;

pub use filter::EntryFilter;
pub use store::{EntryStore, SharedStore};
pub use types::{sample_entries, Category, ContentType, Entry, ParseTagError, Source};
