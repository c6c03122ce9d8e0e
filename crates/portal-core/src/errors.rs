//! Cross-cutting error types for the portal.
//!
//! Storage errors (`DatabaseError`) live in `portal-db`; configuration errors
//! live in `portal-config`. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while building records from user input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
