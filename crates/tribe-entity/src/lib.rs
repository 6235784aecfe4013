//! # tribe-entity
//!
//! Domain entity models for AdyaTribe events. Every struct in this crate
//! is an in-memory aggregate or value object. All entities derive
//! `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod event;
pub mod member;
pub mod rsvp;
