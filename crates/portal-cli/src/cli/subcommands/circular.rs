use chrono::NaiveDate;
use clap::Subcommand;
use portal_core::requests::DEFAULT_CATEGORY;

/// Circular commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CircularCommands {
    /// List circulars, newest first.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Issue a circular.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        summary: String,
        #[arg(long)]
        ref_number: String,
        /// YYYY-MM-DD
        #[arg(long)]
        issue_date: NaiveDate,
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
        #[arg(long)]
        attachment: Option<String>,
    },
}
