//! Database error types for portal-db.

use portal_core::errors::CoreError;
use thiserror::Error;

/// Errors from content store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The backing engine could not be opened or initialized.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A row could not be decoded into a record.
    #[error("Query failed: {0}")]
    Query(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Input was rejected before reaching SQL.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
