use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuickLink {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub url: String,
    pub is_external: bool,
}

/// A sidebar block of links. Owns its links; deleting it deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuickLinkCategory {
    pub id: i64,
    pub name: String,
    pub order_index: i64,
    pub links: Vec<QuickLink>,
}
