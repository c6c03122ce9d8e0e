use serde::Serialize;

use portal_core::entities::MenuItem;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MenuCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MenuResponse {
    menu: Vec<MenuItem>,
}

pub async fn handle(action: &MenuCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MenuCommands::List => {
            let menu = ctx.service.list_menus().await?;
            output(&MenuResponse { menu }, flags.format)
        }
    }
}
