use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GalleryAlbum {
    pub id: i64,
    pub title: String,
    pub cover_image: String,
    pub photo_count: i64,
    pub date: NaiveDate,
}
