use std::path::PathBuf;

use clap::Subcommand;

/// Holiday calendar commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HolidayCommands {
    /// List holidays in date order.
    List {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Import a `Name,Date,Type,Notes` CSV. All rows or none are stored.
    Import { file: PathBuf },
}
