//! Domain event bus configuration.

use serde::{Deserialize, Serialize};

/// Broadcast channel settings for domain events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusConfig {
    /// Number of events buffered per subscriber before it starts lagging.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    256
}
