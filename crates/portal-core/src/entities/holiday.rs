use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::HolidayType;

/// A calendar holiday. Tentative holidays await confirmation (e.g. moon sighting).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub holiday_type: HolidayType,
    pub is_tentative: bool,
    pub notes: Option<String>,
    pub colour_hex: String,
}
