//! Read-side result shapes that are not rows of a single table.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ContentType;

/// Maximum search hits returned per content type.
pub const SEARCH_LIMIT_PER_TYPE: u32 = 5;

/// A single free-text search hit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchResult {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub title: String,
    pub snippet: String,
    pub date: DateTime<Utc>,
}

/// Number of posts and circulars published in one year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArchiveStat {
    pub year: i32,
    pub count: u32,
}

/// Outcome of a holiday CSV import.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: u32,
}
