//! Record structs for every portal table.
//!
//! Each struct maps to one table in the libSQL schema. All derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and the
//! `portal schema` command.

mod circular;
mod event;
mod gallery;
mod holiday;
mod link;
mod menu;
mod post;
mod user;

pub use circular::{ATTACHMENT_PLACEHOLDER, Circular};
pub use event::OrgEvent;
pub use gallery::GalleryAlbum;
pub use holiday::Holiday;
pub use link::{QuickLink, QuickLinkCategory};
pub use menu::MenuItem;
pub use post::JournalPost;
pub use user::UserProfile;
