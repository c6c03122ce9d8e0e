//! Service layer over the content store.
//!
//! `PortalService` wraps `PortalDb` (raw database access). All repo methods
//! are implemented as `impl PortalService` blocks under [`crate::repos`].

use portal_config::StoreConfig;

use crate::PortalDb;
use crate::error::DatabaseError;

/// Typed operations over every portal collection.
pub struct PortalService {
    db: PortalDb,
}

impl PortalService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = PortalDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Open the store described by `config`, seeding demo content when enabled.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or seeding fails.
    pub async fn open(config: &StoreConfig) -> Result<Self, DatabaseError> {
        let service = Self::new_local(&config.path).await?;
        if config.seed_demo_data {
            service.seed_demo_data().await?;
        }
        Ok(service)
    }

    /// Create from an existing `PortalDb` (for testing).
    #[must_use]
    pub const fn from_db(db: PortalDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PortalDb {
        &self.db
    }
}
