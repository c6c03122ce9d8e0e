//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_mail_domain() -> String {
    String::from("csir.res.in")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Domain appended to usernames to form profile email addresses.
    #[serde(default = "default_mail_domain")]
    pub mail_domain: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            mail_domain: default_mail_domain(),
        }
    }
}
