use serde::Serialize;

use portal_core::entities::GalleryAlbum;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GalleryCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GalleryResponse {
    albums: Vec<GalleryAlbum>,
}

pub async fn handle(
    action: &GalleryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GalleryCommands::List => {
            let mut albums = ctx.service.list_albums().await?;
            apply_limit(&mut albums, effective_limit(None, flags.limit, ctx.default_limit()));
            output(&GalleryResponse { albums }, flags.format)
        }
    }
}
