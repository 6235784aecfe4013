//! Confirmed attendee rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::types::id::{AttendeeId, UserId};

use super::waitlist::WaitlistEntry;
use crate::member::{Member, MembershipTier};

/// Attendance state of an attendee row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendeeStatus {
    /// Holds a spot.
    Confirmed,
    /// Gave the spot up.
    Cancelled,
}

/// A member holding a confirmed spot at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Row identifier.
    pub id: AttendeeId,
    /// The member.
    pub user_id: UserId,
    /// Display name at registration time.
    pub name: String,
    /// Contact email at registration time.
    pub email: String,
    /// Tier at registration time.
    pub membership_tier: MembershipTier,
    /// When the spot was confirmed.
    pub joined_at: DateTime<Utc>,
    /// Attendance state.
    pub status: AttendeeStatus,
}

impl Attendee {
    /// Confirms `member` at `now`.
    pub fn confirm(member: &Member, now: DateTime<Utc>) -> Self {
        Self {
            id: AttendeeId::new(),
            user_id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            membership_tier: member.membership_tier,
            joined_at: now,
            status: AttendeeStatus::Confirmed,
        }
    }

    /// Promotes a waitlist entry, carrying its identity fields over and
    /// stamping a fresh confirmation time.
    pub fn promote(entry: WaitlistEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: AttendeeId::new(),
            user_id: entry.user_id,
            name: entry.name,
            email: entry.email,
            membership_tier: entry.membership_tier,
            joined_at: now,
            status: AttendeeStatus::Confirmed,
        }
    }
}
