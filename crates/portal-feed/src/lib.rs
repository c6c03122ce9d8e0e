//! # portal-feed
//!
//! Unified content feed for the portal home page.
//!
//! Translates a [`FeedContext`](portal_core::feed::FeedContext) (tab,
//! category, year, search) into store reads, runs them concurrently, and
//! merges posts, circulars, and events into one newest-first sequence. A
//! search query bypasses the merge and returns the store's search hits.
//!
//! Every load takes a ticket from [`FeedAggregator`]; a load that finishes
//! after a newer one started reports [`FeedLoad::Superseded`] so a slow
//! response can never overwrite a fresher view held in [`FeedState`].

pub mod aggregator;
pub mod error;
pub mod merge;
pub mod source;
pub mod state;

pub use aggregator::{FeedAggregator, FeedLoad, FeedPage, FeedView, LoadTicket};
pub use error::FeedError;
pub use merge::merge_feed;
pub use source::ContentSource;
pub use state::FeedState;
