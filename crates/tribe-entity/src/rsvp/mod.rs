//! RSVP entities.

pub mod model;
pub mod status;

pub use model::Rsvp;
pub use status::RsvpStatus;
