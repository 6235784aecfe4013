//! Event catalogue domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::{EventId, UserId};

/// Events related to the event catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CatalogEvent {
    /// A host created an event.
    Created {
        /// The new event.
        event_id: EventId,
        /// The hosting member.
        host_id: UserId,
        /// Event title.
        title: String,
    },
    /// An attendee reviewed an event.
    Reviewed {
        /// The event.
        event_id: EventId,
        /// The reviewer.
        user_id: UserId,
        /// Rating given.
        rating: u8,
        /// Average rating after the review.
        average_rating: f64,
    },
}
