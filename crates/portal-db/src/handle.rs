//! Process-wide store handle.
//!
//! Every consumer in one process shares a single opened store. The first
//! caller opens (and seeds) it; later callers get the same instance no
//! matter which config they pass. A failed open leaves the cell empty so the
//! next caller retries.

use portal_config::StoreConfig;
use tokio::sync::OnceCell;

use crate::error::DatabaseError;
use crate::service::PortalService;

static SHARED: OnceCell<PortalService> = OnceCell::const_new();

/// Get the shared store, opening it with `config` on first use.
///
/// # Errors
///
/// Returns `DatabaseError` if the store has not been opened yet and opening fails.
pub async fn shared(config: &StoreConfig) -> Result<&'static PortalService, DatabaseError> {
    SHARED
        .get_or_try_init(|| async {
            tracing::debug!(path = %config.path, "opening shared content store");
            PortalService::open(config).await
        })
        .await
}

/// The shared store if some caller already opened it.
#[must_use]
pub fn try_shared() -> Option<&'static PortalService> {
    SHARED.get()
}
