//! Member (authenticated user) entities.

pub mod model;
pub mod tier;

pub use model::Member;
pub use tier::MembershipTier;
