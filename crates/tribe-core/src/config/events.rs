//! Event creation defaults and review constraints.

use serde::{Deserialize, Serialize};

/// Defaults applied when a host creates an event without specifying them,
/// and the bounds used to validate reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Capacity used when the host leaves `max_attendees` unset.
    #[serde(default = "default_max_attendees")]
    pub default_max_attendees: u32,
    /// ISO currency code for event prices.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Whether new events accept a waitlist once full.
    #[serde(default = "default_true")]
    pub default_allow_waitlist: bool,
    /// Lowest accepted review rating.
    #[serde(default = "default_min_rating")]
    pub min_rating: u8,
    /// Highest accepted review rating.
    #[serde(default = "default_max_rating")]
    pub max_rating: u8,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            default_max_attendees: default_max_attendees(),
            default_currency: default_currency(),
            default_allow_waitlist: true,
            min_rating: default_min_rating(),
            max_rating: default_max_rating(),
        }
    }
}

fn default_max_attendees() -> u32 {
    20
}

fn default_currency() -> String {
    "GBP".to_string()
}

fn default_true() -> bool {
    true
}

fn default_min_rating() -> u8 {
    1
}

fn default_max_rating() -> u8 {
    5
}
