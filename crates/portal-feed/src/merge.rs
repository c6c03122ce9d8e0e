//! Merge step: three typed lists in, one newest-first feed out.

use portal_core::entities::{Circular, JournalPost, OrgEvent};
use portal_core::feed::FeedItem;

/// Tag every record and sort the concatenation newest first.
///
/// Concatenation order is posts, circulars, events. The sort is stable, so
/// items with equal `sort_date` keep that order (and the store's order
/// within each kind).
#[must_use]
pub fn merge_feed(
    posts: Vec<JournalPost>,
    circulars: Vec<Circular>,
    events: Vec<OrgEvent>,
) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = posts
        .into_iter()
        .map(FeedItem::from_post)
        .chain(circulars.into_iter().map(FeedItem::from_circular))
        .chain(events.into_iter().map(FeedItem::from_event))
        .collect();
    items.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));
    items
}
