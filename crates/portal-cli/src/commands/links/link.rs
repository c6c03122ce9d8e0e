use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemovedLink {
    link: i64,
    removed: bool,
}

pub async fn add(
    category_id: i64,
    title: &str,
    url: &str,
    is_external: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let link = ctx
        .service
        .create_quick_link(category_id, title, url, is_external)
        .await?;
    output(&link, flags.format)
}

pub async fn remove(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_quick_link(id).await?;
    output(&RemovedLink { link: id, removed: true }, flags.format)
}
