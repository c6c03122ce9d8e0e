use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use portal_core::entities::Holiday;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HolidayCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct HolidayListResponse {
    holidays: Vec<Holiday>,
}

#[derive(Debug, Serialize)]
struct ImportResponse {
    file: String,
    inserted: u32,
}

/// Handle `portal holiday`.
pub async fn handle(
    action: &HolidayCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HolidayCommands::List { year } => {
            let holidays = ctx.service.list_holidays(*year).await?;
            output(&HolidayListResponse { holidays }, flags.format)
        }
        HolidayCommands::Import { file } => import(file, ctx, flags).await,
    }
}

async fn import(file: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let summary = ctx
        .service
        .import_holidays_csv(&text)
        .await
        .with_context(|| format!("holiday import from {} rolled back", file.display()))?;
    output(
        &ImportResponse {
            file: file.display().to_string(),
            inserted: summary.inserted,
        },
        flags.format,
    )
}
