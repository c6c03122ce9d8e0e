use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A news or announcement post. `priority` pins it above unpinned posts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JournalPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub priority: bool,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub attachment_url: Option<String>,
}
