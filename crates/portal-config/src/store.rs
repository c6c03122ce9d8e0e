//! Content store configuration.

use serde::{Deserialize, Serialize};

/// Path used for in-memory stores.
pub const MEMORY_PATH: &str = ":memory:";

fn default_path() -> String {
    String::from("portal.db")
}

const fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Seed demo content into empty tables when the store is opened.
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

impl StoreConfig {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: MEMORY_PATH.to_string(),
            seed_demo_data: false,
        }
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == MEMORY_PATH
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            seed_demo_data: default_seed(),
        }
    }
}
