//! Core traits defined in `tribe-core` and implemented by other crates.

pub mod service;

pub use service::Service;
