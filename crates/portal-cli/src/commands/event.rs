use serde::Serialize;

use portal_core::entities::OrgEvent;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EventListResponse {
    events: Vec<OrgEvent>,
}

pub async fn handle(action: &EventCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EventCommands::List => {
            let mut events = ctx.service.list_events().await?;
            apply_limit(&mut events, effective_limit(None, flags.limit, ctx.default_limit()));
            output(&EventListResponse { events }, flags.format)
        }
    }
}
