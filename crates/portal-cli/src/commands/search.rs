use serde::Serialize;

use portal_core::responses::SearchResult;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

/// Handle `portal search`. At most five posts then five circulars.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let results = ctx.service.search(&args.query).await?;
    output(&SearchResponse { results }, flags.format)
}
