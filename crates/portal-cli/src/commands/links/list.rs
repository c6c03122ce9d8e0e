use serde::Serialize;

use portal_core::entities::QuickLinkCategory;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LinkListResponse {
    categories: Vec<QuickLinkCategory>,
}

/// Flattened link row for table output.
#[derive(Debug, Serialize)]
struct LinkRow<'a> {
    category_id: i64,
    category: &'a str,
    id: i64,
    title: &'a str,
    url: &'a str,
    external: bool,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories = ctx.service.list_link_categories().await?;
    if flags.format == OutputFormat::Table {
        let rows = categories
            .iter()
            .flat_map(|category| {
                category.links.iter().map(move |link| LinkRow {
                    category_id: category.id,
                    category: &category.name,
                    id: link.id,
                    title: &link.title,
                    url: &link.url,
                    external: link.is_external,
                })
            })
            .collect::<Vec<_>>();
        return output(&rows, flags.format);
    }
    output(&LinkListResponse { categories }, flags.format)
}
