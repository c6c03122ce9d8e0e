use anyhow::Context;
use portal_config::PortalConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PortalConfig> {
    let config = PortalConfig::load_with_dotenv().context("failed to load portal configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: PortalConfig, flags: &GlobalFlags) -> anyhow::Result<PortalConfig> {
    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "store path overridden by --db");
        config.store.path.clone_from(db);
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            db: db.map(String::from),
        }
    }

    #[test]
    fn db_flag_replaces_configured_path() {
        let config = apply_overrides(PortalConfig::default(), &flags(Some(":memory:"))).unwrap();
        assert!(config.store.is_in_memory());
    }

    #[test]
    fn no_flag_keeps_configured_path() {
        let config = apply_overrides(PortalConfig::default(), &flags(None)).unwrap();
        assert_eq!(config.store.path, "portal.db");
    }

    #[test]
    fn blank_db_flag_is_rejected() {
        let err = apply_overrides(PortalConfig::default(), &flags(Some(" "))).unwrap_err();
        assert!(err.to_string().contains("store.path"));
    }
}
