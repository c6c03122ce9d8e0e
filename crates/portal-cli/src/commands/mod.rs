pub mod archive;
pub mod circular;
pub mod dispatch;
pub mod event;
pub mod feed;
pub mod gallery;
pub mod holiday;
pub mod init;
pub mod links;
pub mod menu;
pub mod post;
pub mod profile;
pub mod schema;
pub mod search;
pub mod shared;
