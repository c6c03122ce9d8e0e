mod category;
mod link;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LinkCommands;
use crate::context::AppContext;

/// Handle `portal links`.
pub async fn handle(action: &LinkCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LinkCommands::List => list::run(ctx, flags).await,
        LinkCommands::AddCategory { name } => category::add(name, ctx, flags).await,
        LinkCommands::RemoveCategory { id } => category::remove(*id, ctx, flags).await,
        LinkCommands::Add {
            category,
            title,
            url,
            internal,
        } => link::add(*category, title, url, !*internal, ctx, flags).await,
        LinkCommands::Remove { id } => link::remove(*id, ctx, flags).await,
    }
}
