use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    /// `true` for user input, `false` for assistant output.
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    /// Entries a reply was built from, if any matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_entry_ids: Option<Vec<Uuid>>,
}

impl Message {
    fn new(content: impl Into<String>, is_user: bool, related_entry_ids: Option<Vec<Uuid>>) -> Self {
        Self {
            id: Uuid::now_v7(),
            content: content.into(),
            is_user,
            timestamp: Utc::now(),
            related_entry_ids,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, true, None)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(content, false, None)
    }

    /// An assistant reply referencing `related` entries; an empty list is stored as `None`.
    pub fn reply(content: impl Into<String>, related: Vec<Uuid>) -> Self {
        let related = (!related.is_empty()).then_some(related);
        Self::new(content, false, related)
    }

    pub fn related_ids(&self) -> &[Uuid] {
        self.related_entry_ids.as_deref().unwrap_or_default()
    }
}
