//! Integration tests driven through the public service API.

mod helpers;

mod catalog_test;
mod rsvp_test;
mod seed_test;
