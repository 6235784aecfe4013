//! Async RSVP service: per-event locking, logging, and event publication.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use tribe_core::events::{DomainEvent, RsvpEvent};
use tribe_core::traits::Service;
use tribe_core::types::id::EventId;
use tribe_entity::member::Member;
use tribe_entity::rsvp::RsvpStatus;

use super::allocation::{self, Allocation};
use super::error::RsvpError;
use super::receipt::{CancelReceipt, RsvpReceipt};
use crate::bus::EventBus;
use crate::store::EventStore;

/// Registers and cancels RSVPs.
///
/// Each call holds the target event's lock for its whole duration, so two
/// requests for the same event never interleave. Domain events are
/// published after the lock is released.
#[derive(Debug, Clone)]
pub struct RsvpService {
    /// Event ledgers.
    store: Arc<EventStore>,
    /// Domain event fan-out.
    bus: Arc<EventBus>,
}

impl RsvpService {
    /// Creates a new RSVP service.
    pub fn new(store: Arc<EventStore>, bus: Arc<EventBus>) -> Self {
        Self { store, bus }
    }

    /// Registers `member` for an event, confirming or waitlisting them.
    pub async fn register(
        &self,
        event_id: EventId,
        member: &Member,
    ) -> Result<RsvpReceipt, RsvpError> {
        let handle = self.store.handle(event_id).ok_or(RsvpError::EventNotFound)?;

        let result = {
            let mut ledger = handle.lock().await;
            allocation::register(&mut ledger, member, Utc::now())
        };

        let allocation = match result {
            Ok(allocation) => allocation,
            Err(err) => {
                debug!(event_id = %event_id, user_id = %member.id, reason = %err, "Registration rejected");
                return Err(err);
            }
        };

        let event = match allocation {
            Allocation::Confirmed => {
                info!(event_id = %event_id, user_id = %member.id, "RSVP confirmed");
                RsvpEvent::Confirmed {
                    event_id,
                    user_id: member.id,
                }
            }
            Allocation::Waitlisted { position } => {
                info!(event_id = %event_id, user_id = %member.id, position, "RSVP waitlisted");
                RsvpEvent::Waitlisted {
                    event_id,
                    user_id: member.id,
                    position,
                }
            }
        };
        self.bus.publish(DomainEvent::rsvp(member.id, event));

        Ok(RsvpReceipt::from_allocation(event_id, allocation))
    }

    /// Cancels `member`'s RSVP, promoting the waitlist head when a
    /// confirmed spot frees up.
    pub async fn cancel(
        &self,
        event_id: EventId,
        member: &Member,
    ) -> Result<CancelReceipt, RsvpError> {
        let handle = self.store.handle(event_id).ok_or(RsvpError::EventNotFound)?;

        let outcome = {
            let mut ledger = handle.lock().await;
            allocation::cancel(&mut ledger, member.id, Utc::now())?
        };

        match outcome.previous {
            RsvpStatus::Waitlist => {
                info!(
                    event_id = %event_id,
                    user_id = %member.id,
                    position = outcome.left_position,
                    "Left waitlist"
                );
                self.bus.publish(DomainEvent::rsvp(
                    member.id,
                    RsvpEvent::WaitlistLeft {
                        event_id,
                        user_id: member.id,
                        position: outcome.left_position.unwrap_or_default(),
                    },
                ));
            }
            _ => {
                info!(event_id = %event_id, user_id = %member.id, "Attendance cancelled");
                self.bus.publish(DomainEvent::rsvp(
                    member.id,
                    RsvpEvent::AttendanceCancelled {
                        event_id,
                        user_id: member.id,
                    },
                ));
            }
        }

        if let Some(promoted) = outcome.promoted {
            info!(event_id = %event_id, user_id = %promoted, "Promoted from waitlist");
            self.bus.publish(DomainEvent::rsvp(
                member.id,
                RsvpEvent::Promoted {
                    event_id,
                    user_id: promoted,
                    replaced: member.id,
                },
            ));
        }

        Ok(CancelReceipt::cancelled(outcome.promoted))
    }
}

impl Service for RsvpService {
    fn name(&self) -> &'static str {
        "rsvp"
    }
}
