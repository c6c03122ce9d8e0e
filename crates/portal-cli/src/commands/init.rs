use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    store: String,
    seeded: Vec<&'static str>,
}

/// Handle `portal init`.
///
/// Opening the context already ran migrations; this seeds whichever tables
/// are still empty.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.service.seed_demo_data().await?;
    output(
        &InitResponse {
            store: ctx.config.store.path.clone(),
            seeded: report.seeded,
        },
        flags.format,
    )
}
