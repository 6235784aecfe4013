//! RSVP record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::types::id::{EventId, RsvpId, UserId};

use super::status::RsvpStatus;

/// Links a member to an event.
///
/// At most one record per (member, event) may be in a non-cancelled state.
/// Cancelled records are kept as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    /// Unique RSVP identifier.
    pub id: RsvpId,
    /// The event.
    pub event_id: EventId,
    /// The member.
    pub user_id: UserId,
    /// Current state.
    pub status: RsvpStatus,
    /// When the RSVP was first made.
    pub created_at: DateTime<Utc>,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Rsvp {
    /// Creates a new RSVP record.
    pub fn new(event_id: EventId, user_id: UserId, status: RsvpStatus, now: DateTime<Utc>) -> Self {
        Self {
            id: RsvpId::new(),
            event_id,
            user_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this record still holds a spot or a queue position.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Moves the record to `status`.
    pub fn transition(&mut self, status: RsvpStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}
