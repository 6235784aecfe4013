//! In-memory event store shared by the RSVP and catalogue services.

pub mod ledger;
pub mod memory;

pub use ledger::EventLedger;
pub use memory::EventStore;
