use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// Profile of a portal user. Credentials are handled outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl UserProfile {
    /// Mailbox derived from the username on the institute domain.
    #[must_use]
    pub fn email(&self, domain: &str) -> String {
        format!("{}@{domain}", self.username)
    }
}
