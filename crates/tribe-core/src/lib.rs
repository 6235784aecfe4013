//! # tribe-core
//!
//! Core crate for AdyaTribe events. Contains configuration schemas,
//! typed identifiers, domain events, sorting types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other tribe crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
