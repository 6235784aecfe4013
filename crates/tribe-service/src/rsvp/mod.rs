//! RSVP allocation: registration, cancellation, and waitlist promotion.

pub mod allocation;
pub mod error;
pub mod receipt;
pub mod service;

pub use allocation::{Allocation, Cancellation};
pub use error::RsvpError;
pub use receipt::{CancelReceipt, RsvpReceipt};
pub use service::RsvpService;
