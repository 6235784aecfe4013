//! Event catalogue: browsing, hosting, and reviews.

pub mod filter;
pub mod service;

pub use filter::{Availability, EventFilters, EventSort, EventSortField};
pub use service::EventService;
