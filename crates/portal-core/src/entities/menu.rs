use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MenuKind;

/// Navigation entry. `route` is an internal route name or an external URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i64,
    pub label: String,
    pub route: String,
    #[serde(rename = "type")]
    pub kind: MenuKind,
    pub order: i64,
}
