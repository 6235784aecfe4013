//! Waitlist entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::types::id::{UserId, WaitlistEntryId};

use crate::member::{Member, MembershipTier};

/// A member queued for a spot at a full event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Entry identifier.
    pub id: WaitlistEntryId,
    /// The member.
    pub user_id: UserId,
    /// Display name at join time.
    pub name: String,
    /// Contact email at join time.
    pub email: String,
    /// Tier at join time.
    pub membership_tier: MembershipTier,
    /// When the member joined the queue.
    pub joined_at: DateTime<Utc>,
    /// 1-based queue position; always index + 1.
    pub position: u32,
    /// Whether the host has contacted this member about an opening.
    #[serde(default)]
    pub notified: bool,
}

impl WaitlistEntry {
    /// Queues `member` at `position`.
    pub fn join(member: &Member, position: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: WaitlistEntryId::new(),
            user_id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            membership_tier: member.membership_tier,
            joined_at: now,
            position,
            notified: false,
        }
    }
}
