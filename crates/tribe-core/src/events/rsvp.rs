//! RSVP and waitlist domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::{EventId, UserId};

/// Events related to RSVP allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RsvpEvent {
    /// A member took a confirmed spot.
    Confirmed {
        /// The event.
        event_id: EventId,
        /// The member.
        user_id: UserId,
    },
    /// A member joined the waitlist.
    Waitlisted {
        /// The event.
        event_id: EventId,
        /// The member.
        user_id: UserId,
        /// 1-based queue position at join time.
        position: u32,
    },
    /// A waitlisted member was promoted into a freed spot.
    Promoted {
        /// The event.
        event_id: EventId,
        /// The promoted member.
        user_id: UserId,
        /// The member whose cancellation freed the spot.
        replaced: UserId,
    },
    /// A member cancelled a confirmed spot.
    AttendanceCancelled {
        /// The event.
        event_id: EventId,
        /// The member.
        user_id: UserId,
    },
    /// A member left the waitlist.
    WaitlistLeft {
        /// The event.
        event_id: EventId,
        /// The member.
        user_id: UserId,
        /// Position the member held before leaving.
        position: u32,
    },
}
