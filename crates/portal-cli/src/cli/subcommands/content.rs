use clap::Subcommand;

/// Event commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EventCommands {
    /// List events, soonest first.
    List,
}

/// Menu commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MenuCommands {
    /// List navigation entries in display order.
    List,
}

/// Gallery commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GalleryCommands {
    /// List albums, most recent first.
    List,
}
