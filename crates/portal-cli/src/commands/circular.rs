use anyhow::Context;
use serde::Serialize;

use portal_core::entities::Circular;
use portal_core::requests::{CreateCircularRequest, Submission};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CircularCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CircularListResponse {
    circulars: Vec<Circular>,
}

/// Handle `portal circular`.
pub async fn handle(
    action: &CircularCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CircularCommands::List {
            category,
            year,
            limit,
        } => {
            let mut circulars = ctx
                .service
                .list_circulars(category.as_deref(), *year)
                .await?;
            apply_limit(
                &mut circulars,
                effective_limit(*limit, flags.limit, ctx.default_limit()),
            );
            output(&CircularListResponse { circulars }, flags.format)
        }
        CircularCommands::Create {
            title,
            summary,
            ref_number,
            issue_date,
            category,
            attachment,
        } => {
            let submission = Submission::Circular(CreateCircularRequest {
                title: title.clone(),
                summary: summary.clone(),
                ref_number: ref_number.clone(),
                issue_date: *issue_date,
                category: category.clone(),
                attachment_url: attachment.clone(),
            });
            let submitted = ctx
                .service
                .submit(&submission)
                .await
                .with_context(|| format!("failed to issue circular {ref_number}"))?;
            output(&submitted, flags.format)
        }
    }
}
