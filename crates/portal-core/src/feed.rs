//! Unified feed item and the filter context that drives a feed load.
//!
//! A [`FeedItem`] wraps one post, circular, or event together with the
//! instant it sorts by. Items are derived for display only and never written
//! back to the store.

use chrono::{DateTime, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Circular, JournalPost, OrgEvent};
use crate::enums::{ContentTab, ContentType};

/// The record carried by a feed item, tagged by `content_type`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum FeedEntry {
    Journal(JournalPost),
    Circular(Circular),
    Event(OrgEvent),
}

/// One row of the merged feed.
///
/// `sort_date` always equals the wrapped record's canonical date:
/// `published_at` for posts, `issue_date` at midnight UTC for circulars,
/// `date` for events.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct FeedItem {
    pub sort_date: DateTime<Utc>,
    #[serde(flatten)]
    pub entry: FeedEntry,
}

impl FeedItem {
    #[must_use]
    pub const fn from_post(post: JournalPost) -> Self {
        Self {
            sort_date: post.published_at,
            entry: FeedEntry::Journal(post),
        }
    }

    #[must_use]
    pub fn from_circular(circular: Circular) -> Self {
        Self {
            sort_date: circular.issue_date.and_time(NaiveTime::MIN).and_utc(),
            entry: FeedEntry::Circular(circular),
        }
    }

    #[must_use]
    pub const fn from_event(event: OrgEvent) -> Self {
        Self {
            sort_date: event.date,
            entry: FeedEntry::Event(event),
        }
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        match self.entry {
            FeedEntry::Journal(_) => ContentType::Journal,
            FeedEntry::Circular(_) => ContentType::Circular,
            FeedEntry::Event(_) => ContentType::Event,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match &self.entry {
            FeedEntry::Journal(p) => &p.title,
            FeedEntry::Circular(c) => &c.title,
            FeedEntry::Event(e) => &e.title,
        }
    }

    /// Store id of the wrapped record. Unique only within one content type.
    #[must_use]
    pub const fn record_id(&self) -> i64 {
        match &self.entry {
            FeedEntry::Journal(p) => p.id,
            FeedEntry::Circular(c) => c.id,
            FeedEntry::Event(e) => e.id,
        }
    }
}

impl From<JournalPost> for FeedItem {
    fn from(post: JournalPost) -> Self {
        Self::from_post(post)
    }
}

impl From<Circular> for FeedItem {
    fn from(circular: Circular) -> Self {
        Self::from_circular(circular)
    }
}

impl From<OrgEvent> for FeedItem {
    fn from(event: OrgEvent) -> Self {
        Self::from_event(event)
    }
}

/// Filter state of the home feed. Owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeedContext {
    #[serde(default)]
    pub tab: ContentTab,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub search: Option<String>,
}

impl FeedContext {
    #[must_use]
    pub fn for_tab(tab: ContentTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// The search query, if one is set and non-empty.
    #[must_use]
    pub fn search_query(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Category filter. `"All"` and empty strings mean no filter.
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "All")
    }

    #[must_use]
    pub const fn plan(&self) -> FetchPlan {
        FetchPlan {
            posts: self.tab.includes_posts(),
            circulars: self.tab.includes_circulars(),
            events: self.tab.includes_events(),
        }
    }
}

/// Which collections a non-search feed load reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FetchPlan {
    pub posts: bool,
    pub circulars: bool,
    pub events: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;

    use crate::enums::EventKind;

    fn circular(issue: NaiveDate) -> Circular {
        Circular {
            id: 7,
            title: "LTC Guidelines".into(),
            slug: "ltc-guidelines".into(),
            summary: "Checklist".into(),
            ref_number: "ADM/LTC/24-25".into(),
            issue_date: issue,
            category: "Administration".into(),
            is_archived: false,
            attachment_url: "#".into(),
        }
    }

    #[test]
    fn circular_sorts_at_midnight_utc() {
        let issue = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let item = FeedItem::from(circular(issue));
        assert_eq!(
            item.sort_date,
            Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(item.content_type(), ContentType::Circular);
        assert_eq!(item.record_id(), 7);
    }

    #[test]
    fn event_sort_date_is_event_date() {
        let date = Utc.with_ymd_and_hms(2024, 10, 15, 9, 0, 0).unwrap();
        let item = FeedItem::from_event(OrgEvent {
            id: 1,
            title: "Annual Science Conference".into(),
            date,
            location: Some("Auditorium".into()),
            description: None,
            kind: EventKind::Conference,
        });
        assert_eq!(item.sort_date, date);
        assert_eq!(item.title(), "Annual Science Conference");
    }

    #[test]
    fn serialized_item_is_flat_and_tagged() {
        let issue = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let json = serde_json::to_value(FeedItem::from(circular(issue))).unwrap();
        assert_eq!(json["content_type"], "circular");
        assert_eq!(json["ref_number"], "ADM/LTC/24-25");
        assert!(json["sort_date"].as_str().unwrap().starts_with("2024-05-15T00:00:00"));
    }

    #[test]
    fn blank_search_and_all_category_are_no_filter() {
        let ctx = FeedContext {
            tab: ContentTab::News,
            category: Some("All".into()),
            year: None,
            search: Some("   ".into()),
        };
        assert_eq!(ctx.search_query(), None);
        assert_eq!(ctx.category_filter(), None);
        assert_eq!(
            ctx.plan(),
            FetchPlan {
                posts: true,
                circulars: false,
                events: false
            }
        );
    }
}
