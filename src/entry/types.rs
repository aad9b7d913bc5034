//! Core entry type definitions.
//!
//! Defines the three closed tag sets ([`ContentType`], [`Source`], [`Category`]) and
//! [`Entry`], a single journal record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returned when a tag name does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseTagError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Implements `as_str`, `label`, `ALL`, `Display` and `FromStr` for a closed tag enum.
macro_rules! tag_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal, $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Stable machine name (matches the serde representation).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }

            /// Display label shown to users.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::entry::types::ParseTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err($crate::entry::types::ParseTagError::new($kind, s)),
                }
            }
        }
    };
}

pub(crate) use tag_enum;

/// How an entry's `content` should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Plain text body.
    #[default]
    Text,
    /// Opaque image reference.
    Image,
    /// A URL string.
    Url,
}

tag_enum!(ContentType, "content type", {
    Text => "text", "텍스트",
    Image => "image", "이미지",
    Url => "url", "URL",
});

/// Where the wisdom came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    SelfWritten,
    Quote,
    Book,
    Movie,
    Conversation,
    Music,
    Other,
}

tag_enum!(Source, "source", {
    SelfWritten => "self_written", "직접 작성",
    Quote => "quote", "명언/인용",
    Book => "book", "책",
    Movie => "movie", "영화",
    Conversation => "conversation", "대화",
    Music => "music", "음악",
    Other => "other", "기타",
});

/// Thematic grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Motivation,
    Reflection,
    Healing,
    Decision,
    Relationship,
    Growth,
    Happiness,
    #[default]
    Other,
}

tag_enum!(Category, "category", {
    Motivation => "motivation", "동기부여",
    Reflection => "reflection", "자기성찰",
    Healing => "healing", "치유/위로",
    Decision => "decision", "결정/선택",
    Relationship => "relationship", "관계",
    Growth => "growth", "성장",
    Happiness => "happiness", "행복",
    Other => "other", "기타",
});

/// A single journal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// UUID v7, assigned once at creation.
    pub id: Uuid,
    /// Body text, image reference, or URL depending on `content_type`.
    pub content: String,
    pub content_type: ContentType,
    pub source: Source,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    /// Refreshed by every store mutation; never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
    /// The situation in which this wisdom was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Associated media for image and URL entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl Entry {
    /// A new text entry, self-written, category `other`, not a favorite.
    pub fn new(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            content: content.into(),
            content_type: ContentType::default(),
            source: Source::default(),
            category: Category::default(),
            created_at: now,
            updated_at: now,
            is_favorite: false,
            context: None,
            media_url: None,
        }
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = Some(media_url.into());
        self
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Refresh `updated_at`, never moving it backwards.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at).max(self.created_at);
    }
}

/// The three entries shown on first run.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("오늘 할 수 있는 일을 내일로 미루지 마라.")
            .with_source(Source::Quote)
            .with_category(Category::Motivation)
            .with_context("일을 미루다가 결국 마감에 쫓겨 후회했을 때 발견한 명언"),
        Entry::new("실패는 성공의 어머니다. 실패에서 배우는 자세가 중요하다.")
            .with_source(Source::SelfWritten)
            .with_category(Category::Growth)
            .with_context("실패와 성장"),
        Entry::new("진정한 친구는 당신의 성공을 자신의 성공처럼 기뻐해 주는 사람이다.")
            .with_source(Source::Book)
            .with_category(Category::Relationship)
            .with_context("진정한 우정"),
    ]
}
