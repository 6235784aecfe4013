//! Per-event ledger: the event aggregate plus its RSVP records.

use std::collections::HashSet;

use tribe_core::error::AppError;
use tribe_core::types::id::UserId;
use tribe_entity::event::{AttendeeStatus, Event};
use tribe_entity::rsvp::{Rsvp, RsvpStatus};

/// Everything guarded by one event's lock.
///
/// RSVP records live next to the event they reference so that the
/// one-active-RSVP-per-member check and the list mutation it guards
/// happen under the same lock.
#[derive(Debug, Clone)]
pub struct EventLedger {
    event: Event,
    rsvps: Vec<Rsvp>,
}

impl EventLedger {
    /// Wraps an externally supplied event.
    ///
    /// Counters and waitlist positions are re-derived from the lists, and
    /// an RSVP record is synthesized for every attendee and waitlist entry.
    /// Zero capacity, cancelled attendee rows, and a member appearing more
    /// than once are rejected.
    pub fn from_event(mut event: Event) -> Result<Self, AppError> {
        if event.max_attendees == 0 {
            return Err(AppError::validation(format!(
                "Event '{}' must have a capacity of at least 1",
                event.title
            )));
        }
        event.normalize();

        let mut seen = HashSet::new();
        let mut rsvps = Vec::with_capacity(event.attendees().len() + event.waitlist().len());

        for attendee in event.attendees() {
            if attendee.status != AttendeeStatus::Confirmed {
                return Err(AppError::validation(format!(
                    "Event '{}' lists cancelled attendee {}",
                    event.title, attendee.user_id
                )));
            }
            if !seen.insert(attendee.user_id) {
                return Err(duplicate_member(&event, attendee.user_id));
            }
            rsvps.push(Rsvp::new(
                event.id,
                attendee.user_id,
                RsvpStatus::Confirmed,
                attendee.joined_at,
            ));
        }
        for entry in event.waitlist() {
            if !seen.insert(entry.user_id) {
                return Err(duplicate_member(&event, entry.user_id));
            }
            rsvps.push(Rsvp::new(
                event.id,
                entry.user_id,
                RsvpStatus::Waitlist,
                entry.joined_at,
            ));
        }

        Ok(Self { event, rsvps })
    }

    /// The event aggregate.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Mutable access for the services in this crate.
    pub(crate) fn event_mut(&mut self) -> &mut Event {
        &mut self.event
    }

    /// All RSVP records, including cancelled history, in creation order.
    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    /// The member's non-cancelled RSVP, if any.
    pub fn active_rsvp(&self, user_id: UserId) -> Option<&Rsvp> {
        self.rsvps
            .iter()
            .find(|r| r.user_id == user_id && r.is_active())
    }

    pub(crate) fn active_rsvp_mut(&mut self, user_id: UserId) -> Option<&mut Rsvp> {
        self.rsvps
            .iter_mut()
            .find(|r| r.user_id == user_id && r.is_active())
    }

    pub(crate) fn push_rsvp(&mut self, rsvp: Rsvp) {
        self.rsvps.push(rsvp);
    }

    /// Whether the event is internally consistent and every confirmed or
    /// waitlisted RSVP matches exactly one list entry.
    pub fn is_consistent(&self) -> bool {
        if !self.event.is_consistent() {
            return false;
        }
        let mut active = HashSet::new();
        for rsvp in self.rsvps.iter().filter(|r| r.is_active()) {
            if !active.insert(rsvp.user_id) {
                return false;
            }
            let listed = match rsvp.status {
                RsvpStatus::Confirmed => self.event.find_attendee(rsvp.user_id).is_some(),
                RsvpStatus::Waitlist => self.event.find_waitlist_entry(rsvp.user_id).is_some(),
                RsvpStatus::Cancelled => false,
            };
            if !listed {
                return false;
            }
        }
        active.len() == self.event.attendees().len() + self.event.waitlist().len()
    }
}

fn duplicate_member(event: &Event, user_id: UserId) -> AppError {
    AppError::validation(format!(
        "Event '{}' lists member {user_id} more than once",
        event.title
    ))
}
