//! Event aggregate and its owned collections.

pub mod attendee;
pub mod model;
pub mod review;
pub mod status;
pub mod waitlist;

pub use attendee::{Attendee, AttendeeStatus};
pub use model::{CreateEvent, Event};
pub use review::EventReview;
pub use status::EventStatus;
pub use waitlist::WaitlistEntry;
