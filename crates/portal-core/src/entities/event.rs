use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EventKind;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OrgEvent {
    pub id: i64,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: EventKind,
}
