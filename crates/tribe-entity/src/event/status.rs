//! Event publication status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication lifecycle of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Being prepared by the host.
    #[default]
    Draft,
    /// Visible and open for RSVPs.
    Published,
    /// Called off.
    Cancelled,
    /// Already happened.
    Completed,
}

impl EventStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = tribe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(tribe_core::AppError::validation(format!(
                "Invalid event status: '{s}'. Expected one of: draft, published, cancelled, completed"
            ))),
        }
    }
}
