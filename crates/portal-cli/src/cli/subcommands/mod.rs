mod circular;
mod content;
mod holiday;
mod links;
mod post;
mod profile;

pub use circular::CircularCommands;
pub use content::{EventCommands, GalleryCommands, MenuCommands};
pub use holiday::HolidayCommands;
pub use links::LinkCommands;
pub use post::PostCommands;
pub use profile::ProfileCommands;
