//! Admin submission payloads.
//!
//! The submission form produces either a post or a circular. Each has its
//! own request struct; [`Submission`] selects between them explicitly.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Category given to submissions that do not name one.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreatePostRequest {
    pub title: String,
    pub excerpt: String,
    /// Rich-text body. Falls back to `excerpt` when absent or empty.
    pub content: Option<String>,
    #[serde(default)]
    pub priority: bool,
    pub category: String,
    pub attachment_url: Option<String>,
}

impl CreatePostRequest {
    #[must_use]
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            content: None,
            priority: false,
            category: DEFAULT_CATEGORY.to_string(),
            attachment_url: None,
        }
    }

    /// Body to store: the given content, or the excerpt.
    #[must_use]
    pub fn effective_content(&self) -> &str {
        self.content
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.excerpt)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the title or category is blank
    /// or the title yields an empty slug.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("category", &self.category)?;
        require_slug(&self.title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateCircularRequest {
    pub title: String,
    pub summary: String,
    pub ref_number: String,
    pub issue_date: NaiveDate,
    pub category: String,
    /// Defaults to the `"#"` placeholder when absent or empty.
    pub attachment_url: Option<String>,
}

impl CreateCircularRequest {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the title or category is blank
    /// or the title yields an empty slug.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("category", &self.category)?;
        require_slug(&self.title)
    }
}

/// One submission from the admin form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Post(CreatePostRequest),
    Circular(CreateCircularRequest),
}

/// Derive a URL-safe slug: lowercase, runs of non-alphanumerics collapse to
/// one `-`, no leading or trailing `-`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_slug(title: &str) -> Result<(), CoreError> {
    if slugify(title).is_empty() {
        return Err(CoreError::Validation(format!(
            "title '{title}' has no characters usable in a slug"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Director's Address on Foundation Day", "director-s-address-on-foundation-day")]
    #[case("  Revision of DA Rates -- Jan 2024!", "revision-of-da-rates-jan-2024")]
    #[case("IT   Maintenance", "it-maintenance")]
    #[case("Café Hours", "caf-hours")]
    #[case("---", "")]
    fn slugify_cases(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(slugify(title), expected);
    }

    #[test]
    fn content_defaults_to_excerpt() {
        let mut req = CreatePostRequest::new("Title", "Short excerpt");
        assert_eq!(req.effective_content(), "Short excerpt");
        req.content = Some(String::new());
        assert_eq!(req.effective_content(), "Short excerpt");
        req.content = Some("<p>Body</p>".into());
        assert_eq!(req.effective_content(), "<p>Body</p>");
    }

    #[test]
    fn validation_rejects_blank_title() {
        let req = CreatePostRequest::new("   ", "x");
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("title must not be empty"));
    }

    #[test]
    fn validation_rejects_unsluggable_title() {
        let req = CreateCircularRequest {
            title: "!!!".into(),
            summary: String::new(),
            ref_number: "X/1".into(),
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: "Finance".into(),
            attachment_url: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn submission_is_tagged_by_kind() {
        let json = serde_json::to_value(Submission::Post(CreatePostRequest::new("T", "E"))).unwrap();
        assert_eq!(json["kind"], "post");
        assert_eq!(json["category"], DEFAULT_CATEGORY);
    }
}
