//! RSVP status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of an RSVP record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    /// The member holds a confirmed spot.
    Confirmed,
    /// The member is queued on the waitlist.
    Waitlist,
    /// The member cancelled.
    Cancelled,
}

impl RsvpStatus {
    /// Whether the status occupies a spot or queue position.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Waitlist => "waitlist",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
