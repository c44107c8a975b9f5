use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(id: i64, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Replace title and content, keeping id and creation time.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.content.to_lowercase().contains(&needle)
    }
}

/// Validated title/content pair. Both fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    pub const REQUIRED_MESSAGE: &'static str = "Title and content are required";

    /// Validate raw request fields. Missing or empty strings are rejected;
    /// whitespace counts as content.
    pub fn parse(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        match (title, content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Ok(Self { title, content })
            }
            _ => Err(DomainError::Validation(Self::REQUIRED_MESSAGE.to_string())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// `createdAt` as ISO-8601 UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
