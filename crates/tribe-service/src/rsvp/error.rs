//! RSVP rejection taxonomy.

use thiserror::Error;

use tribe_core::error::{AppError, ErrorKind};
use tribe_entity::member::MembershipTier;

/// Why a registration or cancellation was refused.
///
/// Every variant is an expected outcome returned to the caller; none is
/// fatal. The `Display` text is the human-readable reason shown to members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsvpError {
    /// The event does not exist.
    #[error("Event not found")]
    EventNotFound,
    /// The member holds no active RSVP for the event.
    #[error("RSVP not found")]
    RsvpNotFound,
    /// The member already holds an active RSVP for the event.
    #[error("Already registered for this event")]
    AlreadyRegistered,
    /// The member's tier is below the event's requirement.
    #[error("membership upgrade required")]
    InsufficientMembership {
        /// Tier the event requires.
        required: MembershipTier,
        /// Tier the member holds.
        actual: MembershipTier,
    },
    /// No spot is free and the event has no waitlist.
    #[error("event full, no waitlist")]
    EventFull,
}

impl RsvpError {
    /// The unified error category for this rejection.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EventNotFound | Self::RsvpNotFound => ErrorKind::NotFound,
            Self::AlreadyRegistered => ErrorKind::Conflict,
            Self::InsufficientMembership { .. } => ErrorKind::Authorization,
            Self::EventFull => ErrorKind::Capacity,
        }
    }
}

impl From<RsvpError> for AppError {
    fn from(err: RsvpError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}
