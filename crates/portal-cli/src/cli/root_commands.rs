use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CircularCommands, EventCommands, GalleryCommands, HolidayCommands, LinkCommands,
    MenuCommands, PostCommands, ProfileCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Open the store, create the schema, and seed demo content.
    Init,
    /// Unified home feed of posts, circulars, and events.
    Feed(FeedArgs),
    /// Search posts and circulars.
    Search(SearchArgs),
    /// Post and circular counts per year.
    Archive,
    /// Journal posts.
    Post {
        #[command(subcommand)]
        action: PostCommands,
    },
    /// Circulars and office memoranda.
    Circular {
        #[command(subcommand)]
        action: CircularCommands,
    },
    /// Organizational events.
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Holiday calendar.
    Holiday {
        #[command(subcommand)]
        action: HolidayCommands,
    },
    /// Sidebar link categories and quick links.
    Links {
        #[command(subcommand)]
        action: LinkCommands,
    },
    /// Navigation menu.
    Menu {
        #[command(subcommand)]
        action: MenuCommands,
    },
    /// Photo gallery albums.
    Gallery {
        #[command(subcommand)]
        action: GalleryCommands,
    },
    /// User profiles.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Dump JSON schema for a record type.
    Schema(SchemaArgs),
}

/// Arguments for `portal feed`.
#[derive(Clone, Debug, Args)]
pub struct FeedArgs {
    /// all, news, circulars, oms, events
    #[arg(long)]
    pub tab: Option<String>,
    /// Category tag; "All" means no filter.
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    /// Search query; replaces the feed with search hits.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `portal search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    pub query: String,
}

/// Arguments for `portal schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type, e.g. post, circular, holiday, feed-item.
    pub type_name: String,
}
