//! Domain events emitted by tribe operations.
//!
//! Events are published on the service-layer bus after a mutation has
//! been committed and are consumed by whatever the host wires up
//! (notifications, audit, CLI echo).

pub mod catalog;
pub mod rsvp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::id::UserId;

pub use catalog::CatalogEvent;
pub use rsvp::RsvpEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The member who caused the event (if applicable).
    pub actor_id: Option<UserId>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// An RSVP / waitlist change.
    Rsvp(RsvpEvent),
    /// An event catalogue change.
    Catalog(CatalogEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<UserId>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }

    /// Shorthand for an RSVP event caused by `actor`.
    pub fn rsvp(actor: UserId, event: RsvpEvent) -> Self {
        Self::new(Some(actor), EventPayload::Rsvp(event))
    }

    /// Shorthand for a catalogue event caused by `actor`.
    pub fn catalog(actor: UserId, event: CatalogEvent) -> Self {
        Self::new(Some(actor), EventPayload::Catalog(event))
    }
}
