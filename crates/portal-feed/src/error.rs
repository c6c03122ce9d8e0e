//! Feed error types for portal-feed.

use portal_db::error::DatabaseError;

/// Errors from loading the feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A store read failed. The whole load fails; no partial view is built.
    #[error("store error: {0}")]
    Store(#[from] DatabaseError),
}
