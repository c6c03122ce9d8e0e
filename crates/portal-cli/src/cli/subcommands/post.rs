use clap::Subcommand;
use portal_core::requests::DEFAULT_CATEGORY;

/// Journal post commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PostCommands {
    /// List posts, pinned first.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Publish a post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        excerpt: String,
        /// Rich-text body; defaults to the excerpt.
        #[arg(long)]
        content: Option<String>,
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
        /// Pin the post to the top of the feed.
        #[arg(long)]
        priority: bool,
        #[arg(long)]
        attachment: Option<String>,
    },
    /// Delete a post by ID.
    Delete { id: i64 },
}
