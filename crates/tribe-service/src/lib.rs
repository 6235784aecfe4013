//! # tribe-service
//!
//! Business logic for AdyaTribe events: the RSVP allocator with its
//! waitlist bookkeeping, the event catalogue, the in-memory event store
//! those services share, and the domain event bus.
//!
//! Services follow constructor injection: the host builds one
//! [`EventStore`] and one [`EventBus`] at startup and hands `Arc`s of
//! them to every service.

pub mod bus;
pub mod catalog;
pub mod rsvp;
pub mod seed;
pub mod store;

pub use bus::EventBus;
pub use catalog::{Availability, EventFilters, EventService, EventSort, EventSortField};
pub use rsvp::{CancelReceipt, RsvpError, RsvpReceipt, RsvpService};
pub use store::{EventLedger, EventStore};
