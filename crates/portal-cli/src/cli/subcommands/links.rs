use clap::Subcommand;

/// Link category and quick link commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LinkCommands {
    /// List categories with their links.
    List,
    /// Add a category at the end.
    AddCategory { name: String },
    /// Remove a category and all of its links.
    RemoveCategory { id: i64 },
    /// Add a link to a category.
    Add {
        /// Category ID.
        #[arg(long)]
        category: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        /// Mark the link as internal (links are external by default).
        #[arg(long)]
        internal: bool,
    },
    /// Remove a link by ID.
    Remove { id: i64 },
}
