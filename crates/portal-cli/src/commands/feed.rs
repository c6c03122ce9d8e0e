use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::Serialize;

use portal_core::entities::QuickLinkCategory;
use portal_core::enums::{ContentTab, ContentType};
use portal_core::feed::{FeedContext, FeedEntry, FeedItem};
use portal_core::responses::{ArchiveStat, SearchResult};
use portal_feed::{FeedAggregator, FeedState, FeedView};

use crate::cli::root_commands::FeedArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FeedResponse {
    tab: ContentTab,
    items: Vec<FeedItem>,
    archive_years: Vec<ArchiveStat>,
    link_categories: Vec<QuickLinkCategory>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    results: Vec<SearchResult>,
}

/// One feed line for table output.
#[derive(Debug, Serialize)]
struct FeedRow<'a> {
    id: i64,
    #[serde(rename = "type")]
    kind: ContentType,
    date: DateTime<Utc>,
    title: &'a str,
    category: &'a str,
    pinned: bool,
}

impl<'a> From<&'a FeedItem> for FeedRow<'a> {
    fn from(item: &'a FeedItem) -> Self {
        let (category, pinned) = match &item.entry {
            FeedEntry::Journal(post) => (post.category.as_str(), post.priority),
            FeedEntry::Circular(circular) => (circular.category.as_str(), false),
            FeedEntry::Event(event) => (event.kind.as_str(), false),
        };
        Self {
            id: item.record_id(),
            kind: item.content_type(),
            date: item.sort_date,
            title: item.title(),
            category,
            pinned,
        }
    }
}

/// Handle `portal feed`.
pub async fn handle(args: &FeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let feed_ctx = FeedContext {
        tab: args
            .tab
            .as_deref()
            .map(|raw| parse_enum(raw, "tab"))
            .transpose()?
            .unwrap_or_default(),
        category: args.category.clone(),
        year: args.year,
        search: args.search.clone(),
    };

    let aggregator = FeedAggregator::new(ctx.service);
    let mut state = FeedState::new();
    state.apply(aggregator.load(&feed_ctx).await);
    if let Some(error) = state.last_error() {
        bail!("feed load failed: {error}");
    }
    let Some(view) = state.into_view() else {
        bail!("feed load was superseded before it completed");
    };

    match view {
        FeedView::Search(results) => output(
            &SearchResponse {
                query: feed_ctx.search.unwrap_or_default(),
                results,
            },
            flags.format,
        ),
        FeedView::Feed(mut page) => {
            apply_limit(
                &mut page.items,
                effective_limit(None, flags.limit, ctx.default_limit()),
            );
            if flags.format == OutputFormat::Table {
                let rows = page.items.iter().map(FeedRow::from).collect::<Vec<_>>();
                return output(&rows, flags.format);
            }
            output(
                &FeedResponse {
                    tab: feed_ctx.tab,
                    items: page.items,
                    archive_years: page.archive_years,
                    link_categories: page.link_categories,
                },
                flags.format,
            )
        }
    }
}
