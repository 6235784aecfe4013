//! Allocation rules applied to a single, already locked event ledger.
//!
//! These functions never await and never touch shared state beyond the
//! ledger they are given; [`super::RsvpService`] is responsible for
//! taking the event's lock around them.

use chrono::{DateTime, Utc};

use tribe_core::types::id::UserId;
use tribe_entity::event::Attendee;
use tribe_entity::member::Member;
use tribe_entity::rsvp::{Rsvp, RsvpStatus};

use super::error::RsvpError;
use crate::store::EventLedger;

/// Outcome of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// The member took a confirmed spot.
    Confirmed,
    /// The member was queued at `position`.
    Waitlisted {
        /// 1-based queue position.
        position: u32,
    },
}

/// Outcome of a successful cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancellation {
    /// What the member held before cancelling.
    pub previous: RsvpStatus,
    /// Queue position the member left, for waitlist cancellations.
    pub left_position: Option<u32>,
    /// The waitlisted member promoted into the freed spot.
    pub promoted: Option<UserId>,
}

/// Registers `member` for the ledger's event.
///
/// Checks run in order: duplicate RSVP, membership tier, capacity,
/// waitlist. On success exactly one of the attendee list or the waitlist
/// grows by one entry and a matching RSVP record is created.
pub fn register(
    ledger: &mut EventLedger,
    member: &Member,
    now: DateTime<Utc>,
) -> Result<Allocation, RsvpError> {
    if ledger.active_rsvp(member.id).is_some() {
        return Err(RsvpError::AlreadyRegistered);
    }

    let required = ledger.event().membership_required;
    if !member.can_access(required) {
        return Err(RsvpError::InsufficientMembership {
            required,
            actual: member.membership_tier,
        });
    }

    let event_id = ledger.event().id;
    let event = ledger.event_mut();

    let (allocation, status) = if event.has_open_spot() {
        event.admit(Attendee::confirm(member, now), now);
        (Allocation::Confirmed, RsvpStatus::Confirmed)
    } else if event.allow_waitlist {
        let position = event.enqueue(member, now).position;
        (Allocation::Waitlisted { position }, RsvpStatus::Waitlist)
    } else {
        return Err(RsvpError::EventFull);
    };

    ledger.push_rsvp(Rsvp::new(event_id, member.id, status, now));
    Ok(allocation)
}

/// Cancels `user_id`'s active RSVP.
///
/// Freeing a confirmed spot promotes the waitlist head (position 1) if
/// there is one. Leaving the waitlist closes the gap in positions. No tier
/// check is applied.
pub fn cancel(
    ledger: &mut EventLedger,
    user_id: UserId,
    now: DateTime<Utc>,
) -> Result<Cancellation, RsvpError> {
    let previous = ledger
        .active_rsvp(user_id)
        .map(|r| r.status)
        .ok_or(RsvpError::RsvpNotFound)?;

    let mut cancellation = Cancellation {
        previous,
        left_position: None,
        promoted: None,
    };

    match previous {
        RsvpStatus::Confirmed => {
            let event = ledger.event_mut();
            if event.remove_attendee(user_id, now).is_none() {
                return Err(RsvpError::RsvpNotFound);
            }
            if let Some(next) = event.pop_waitlist_head(now) {
                let promoted = next.user_id;
                event.admit(Attendee::promote(next, now), now);
                promote_rsvp(ledger, promoted, now);
                cancellation.promoted = Some(promoted);
            }
        }
        RsvpStatus::Waitlist => {
            cancellation.left_position = ledger
                .event_mut()
                .remove_from_waitlist(user_id, now)
                .map(|entry| entry.position);
        }
        RsvpStatus::Cancelled => return Err(RsvpError::RsvpNotFound),
    }

    if let Some(rsvp) = ledger.active_rsvp_mut(user_id) {
        rsvp.transition(RsvpStatus::Cancelled, now);
    }

    Ok(cancellation)
}

fn promote_rsvp(ledger: &mut EventLedger, user_id: UserId, now: DateTime<Utc>) {
    match ledger.active_rsvp_mut(user_id) {
        Some(rsvp) => rsvp.transition(RsvpStatus::Confirmed, now),
        None => {
            let event_id = ledger.event().id;
            ledger.push_rsvp(Rsvp::new(event_id, user_id, RsvpStatus::Confirmed, now));
        }
    }
}
