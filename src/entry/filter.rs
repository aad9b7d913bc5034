//! List filtering: free-text search plus optional tag constraints.

use super::types::{Category, Entry, Source};

/// Criteria for narrowing the entry list. All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive substring of `content`. Empty or `None` matches everything.
    pub query: Option<String>,
    pub source: Option<Source>,
    pub category: Option<Category>,
    pub favorites_only: bool,
}

impl EntryFilter {
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, str::is_empty)
            && self.source.is_none()
            && self.category.is_none()
            && !self.favorites_only
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            if !entry.content.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }
        if self.source.is_some_and(|s| s != entry.source) {
            return false;
        }
        if self.category.is_some_and(|c| c != entry.category) {
            return false;
        }
        !self.favorites_only || entry.is_favorite
    }
}
