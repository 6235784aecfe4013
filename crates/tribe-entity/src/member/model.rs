//! Member entity model.

use serde::{Deserialize, Serialize};

use tribe_core::types::id::UserId;

use super::tier::MembershipTier;

/// The currently authenticated community member, as handed to the
/// allocator by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Paid membership tier.
    pub membership_tier: MembershipTier,
}

impl Member {
    /// Creates a member value.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        membership_tier: MembershipTier,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            membership_tier,
        }
    }

    /// Whether this member's tier satisfies `required`.
    pub fn can_access(&self, required: MembershipTier) -> bool {
        self.membership_tier.has_at_least(required)
    }
}
