use serde::Serialize;

use portal_core::responses::ArchiveStat;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ArchiveResponse {
    years: Vec<ArchiveStat>,
}

/// Handle `portal archive`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let years = ctx.service.archive_year_counts().await?;
    output(&ArchiveResponse { years }, flags.format)
}
