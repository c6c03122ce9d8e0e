use anyhow::bail;
use schemars::{Schema, schema_for};

use portal_core::entities::{
    Circular, GalleryAlbum, Holiday, JournalPost, MenuItem, OrgEvent, QuickLinkCategory,
    UserProfile,
};
use portal_core::feed::{FeedContext, FeedItem};
use portal_core::requests::Submission;
use portal_core::responses::{ArchiveStat, SearchResult};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `portal schema`.
pub const TYPE_NAMES: &[&str] = &[
    "post",
    "circular",
    "event",
    "holiday",
    "link-category",
    "menu-item",
    "album",
    "profile",
    "feed-item",
    "feed-context",
    "search-result",
    "archive-stat",
    "submission",
];

fn schema_for_name(name: &str) -> Option<Schema> {
    let schema = match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "post" => schema_for!(JournalPost),
        "circular" => schema_for!(Circular),
        "event" => schema_for!(OrgEvent),
        "holiday" => schema_for!(Holiday),
        "link-category" => schema_for!(QuickLinkCategory),
        "menu-item" => schema_for!(MenuItem),
        "album" => schema_for!(GalleryAlbum),
        "profile" => schema_for!(UserProfile),
        "feed-item" => schema_for!(FeedItem),
        "feed-context" => schema_for!(FeedContext),
        "search-result" => schema_for!(SearchResult),
        "archive-stat" => schema_for!(ArchiveStat),
        "submission" => schema_for!(Submission),
        _ => return None,
    };
    Some(schema)
}

/// Handle `portal schema`. Needs no store.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_for_name(&args.type_name) else {
        bail!(
            "unknown type '{}'; expected one of: {}",
            args.type_name,
            TYPE_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}
