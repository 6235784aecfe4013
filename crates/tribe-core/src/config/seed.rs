//! Seed data configuration.

use serde::{Deserialize, Serialize};

/// Where to load the initial event catalogue from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to a JSON file containing an array of events. `None` starts
    /// with an empty store.
    #[serde(default)]
    pub path: Option<String>,
}
