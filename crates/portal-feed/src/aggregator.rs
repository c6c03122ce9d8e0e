//! Feed loading: plan, concurrent fetch, merge, staleness check.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use portal_core::entities::QuickLinkCategory;
use portal_core::feed::{FeedContext, FeedItem};
use portal_core::responses::{ArchiveStat, SearchResult};

use crate::error::FeedError;
use crate::merge::merge_feed;
use crate::source::ContentSource;

/// Home page data for one filter context.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub archive_years: Vec<ArchiveStat>,
    pub link_categories: Vec<QuickLinkCategory>,
}

/// What a load produced: the merged feed, or search hits when a query was given.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedView {
    Feed(FeedPage),
    Search(Vec<SearchResult>),
}

/// Outcome of a ticketed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLoad {
    /// No newer load started while this one ran.
    Current { ticket: LoadTicket, view: FeedView },
    /// A newer load started first; this result must be discarded.
    Superseded { ticket: LoadTicket },
}

/// Position of a load in the aggregator's sequence. Higher is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Loads feed views from a [`ContentSource`].
pub struct FeedAggregator<S> {
    source: S,
    generation: AtomicU64,
}

impl<S: ContentSource> FeedAggregator<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Take the next ticket. Every previously issued ticket becomes stale.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the newest one issued.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Start a load for `ctx` and run it.
    ///
    /// # Errors
    ///
    /// Returns `FeedError` if a store read fails and no newer load has started.
    pub async fn load(&self, ctx: &FeedContext) -> Result<FeedLoad, FeedError> {
        let ticket = self.begin();
        self.load_with(ticket, ctx).await
    }

    /// Run a load under a ticket taken earlier with [`Self::begin`].
    ///
    /// Staleness is checked after the reads finish, so a stale load reports
    /// `Superseded` whether its reads succeeded or failed.
    ///
    /// # Errors
    ///
    /// Returns `FeedError` if a store read fails and `ticket` is still current.
    pub async fn load_with(
        &self,
        ticket: LoadTicket,
        ctx: &FeedContext,
    ) -> Result<FeedLoad, FeedError> {
        let result = self.fetch(ctx).await;
        if !self.is_current(ticket) {
            tracing::warn!(
                ticket = ticket.value(),
                latest = self.generation.load(Ordering::SeqCst),
                "discarding superseded feed load"
            );
            return Ok(FeedLoad::Superseded { ticket });
        }
        result.map(|view| FeedLoad::Current { ticket, view })
    }

    /// Build the view for `ctx` without ticketing.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Store` if any read fails; partial results are dropped.
    pub async fn fetch(&self, ctx: &FeedContext) -> Result<FeedView, FeedError> {
        if let Some(query) = ctx.search_query() {
            tracing::debug!(query, "feed search bypasses merge");
            return Ok(FeedView::Search(self.source.search(query).await?));
        }

        let plan = ctx.plan();
        let category = ctx.category_filter();
        let year = ctx.year;
        tracing::debug!(tab = %ctx.tab, ?category, ?year, ?plan, "loading feed");

        let (posts, circulars, events, archive_years, link_categories) = tokio::try_join!(
            async {
                if plan.posts {
                    self.source.list_posts(category, year).await
                } else {
                    Ok(Vec::new())
                }
            },
            async {
                if plan.circulars {
                    self.source.list_circulars(category, year).await
                } else {
                    Ok(Vec::new())
                }
            },
            async {
                if plan.events {
                    self.source.list_events().await
                } else {
                    Ok(Vec::new())
                }
            },
            self.source.archive_year_counts(),
            self.source.list_link_categories(),
        )?;

        let items = merge_feed(posts, circulars, events);
        tracing::debug!(items = items.len(), "feed merged");
        Ok(FeedView::Feed(FeedPage {
            items,
            archive_years,
            link_categories,
        }))
    }
}
