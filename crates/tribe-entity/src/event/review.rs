//! Event reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::types::id::{ReviewId, UserId};

use crate::member::MembershipTier;

/// A rating left by a confirmed attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReview {
    /// Review identifier.
    pub id: ReviewId,
    /// The reviewer.
    pub user_id: UserId,
    /// Name shown next to the review.
    pub reviewer_name: String,
    /// Reviewer's tier at review time.
    pub membership_tier: MembershipTier,
    /// Star rating.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
    /// Number of members who marked the review helpful.
    #[serde(default)]
    pub helpful: u32,
}
