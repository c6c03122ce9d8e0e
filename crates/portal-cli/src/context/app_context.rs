use portal_config::PortalConfig;
use portal_db::{error::DatabaseError, handle, service::PortalService};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: &'static PortalService,
    pub config: PortalConfig,
}

impl AppContext {
    /// Open (or reuse) the process-wide content store described by `config`.
    pub async fn init(config: PortalConfig) -> Result<Self, DatabaseError> {
        let service = handle::shared(&config.store).await?;
        tracing::debug!(
            path = %config.store.path,
            in_memory = config.store.is_in_memory(),
            "application context ready"
        );
        Ok(Self { service, config })
    }

    /// Default row cap for list commands when neither flag is given.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}
