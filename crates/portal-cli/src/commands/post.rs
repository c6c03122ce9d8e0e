use anyhow::Context;
use serde::Serialize;

use portal_core::entities::JournalPost;
use portal_core::requests::{CreatePostRequest, Submission};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PostCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PostListResponse {
    posts: Vec<JournalPost>,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    post: i64,
    deleted: bool,
}

/// Handle `portal post`.
pub async fn handle(action: &PostCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PostCommands::List {
            category,
            year,
            limit,
        } => {
            let mut posts = ctx.service.list_posts(category.as_deref(), *year).await?;
            apply_limit(&mut posts, effective_limit(*limit, flags.limit, ctx.default_limit()));
            output(&PostListResponse { posts }, flags.format)
        }
        PostCommands::Create {
            title,
            excerpt,
            content,
            category,
            priority,
            attachment,
        } => {
            let submission = Submission::Post(CreatePostRequest {
                title: title.clone(),
                excerpt: excerpt.clone(),
                content: content.clone(),
                priority: *priority,
                category: category.clone(),
                attachment_url: attachment.clone(),
            });
            let submitted = ctx
                .service
                .submit(&submission)
                .await
                .with_context(|| format!("failed to publish post '{title}'"))?;
            output(&submitted, flags.format)
        }
        PostCommands::Delete { id } => {
            ctx.service.delete_post(*id).await?;
            output(
                &DeleteResponse {
                    post: *id,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
