//! Caller-facing results of RSVP operations.

use serde::{Deserialize, Serialize};

use tribe_core::types::id::{EventId, UserId};
use tribe_entity::rsvp::RsvpStatus;

use super::allocation::Allocation;
use super::error::RsvpError;

const CONFIRMED_MESSAGE: &str = "Successfully registered for event!";
const WAITLIST_MESSAGE: &str = "Added to waitlist - you'll be notified if a spot opens up!";
const CANCELLED_MESSAGE: &str = "RSVP cancelled successfully";

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpReceipt {
    /// The event.
    pub event_id: EventId,
    /// `confirmed` or `waitlist`.
    pub status: RsvpStatus,
    /// Queue position for waitlisted members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Human-readable message.
    pub message: String,
}

impl RsvpReceipt {
    pub(crate) fn from_allocation(event_id: EventId, allocation: Allocation) -> Self {
        match allocation {
            Allocation::Confirmed => Self {
                event_id,
                status: RsvpStatus::Confirmed,
                position: None,
                message: CONFIRMED_MESSAGE.to_string(),
            },
            Allocation::Waitlisted { position } => Self {
                event_id,
                status: RsvpStatus::Waitlist,
                position: Some(position),
                message: WAITLIST_MESSAGE.to_string(),
            },
        }
    }
}

/// Result of a cancellation, shaped for UI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelReceipt {
    /// Whether the RSVP was cancelled.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Member promoted from the waitlist into the freed spot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<UserId>,
}

impl CancelReceipt {
    pub(crate) fn cancelled(promoted: Option<UserId>) -> Self {
        Self {
            success: true,
            message: CANCELLED_MESSAGE.to_string(),
            promoted,
        }
    }

    /// Folds a rejection into `{ success: false, message }`.
    pub fn from_result(result: Result<CancelReceipt, RsvpError>) -> Self {
        result.unwrap_or_else(|err| Self {
            success: false,
            message: err.to_string(),
            promoted: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_folds_error() {
        let receipt = CancelReceipt::from_result(Err(RsvpError::RsvpNotFound));
        assert!(!receipt.success);
        assert_eq!(receipt.message, "RSVP not found");
        assert!(receipt.promoted.is_none());
    }

    #[test]
    fn test_waitlist_receipt_serializes_position() {
        let receipt =
            RsvpReceipt::from_allocation(EventId::new(), Allocation::Waitlisted { position: 2 });
        let json = serde_json::to_value(&receipt).expect("serialize");
        assert_eq!(json["status"], "waitlist");
        assert_eq!(json["position"], 2);
    }
}
