use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemovedCategory {
    category: i64,
    removed: bool,
}

pub async fn add(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = ctx.service.create_link_category(name).await?;
    output(&category, flags.format)
}

/// Removes the category and its links together.
pub async fn remove(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_link_category(id).await?;
    output(
        &RemovedCategory {
            category: id,
            removed: true,
        },
        flags.format,
    )
}
