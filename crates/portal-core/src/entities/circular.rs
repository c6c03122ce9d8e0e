use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Attachment URL stored when a circular is created without one.
pub const ATTACHMENT_PLACEHOLDER: &str = "#";

/// An office memorandum or notice with a reference number.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Circular {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub ref_number: String,
    pub issue_date: NaiveDate,
    pub category: String,
    pub is_archived: bool,
    pub attachment_url: String,
}

impl Circular {
    /// Whether the attachment is a real link rather than the placeholder.
    #[must_use]
    pub fn has_attachment(&self) -> bool {
        !self.attachment_url.is_empty() && self.attachment_url != ATTACHMENT_PLACEHOLDER
    }
}
