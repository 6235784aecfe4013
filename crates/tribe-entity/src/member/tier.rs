//! Membership tier enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paid membership tiers, ordered `Free < Core < Premium`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    /// Free membership.
    #[default]
    Free,
    /// Core (paid) membership.
    Core,
    /// Premium membership.
    Premium,
}

impl MembershipTier {
    /// Check if this tier meets or exceeds `required`.
    pub fn has_at_least(&self, required: MembershipTier) -> bool {
        *self >= required
    }

    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Core => "core",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipTier {
    type Err = tribe_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "core" => Ok(Self::Core),
            "premium" => Ok(Self::Premium),
            _ => Err(tribe_core::AppError::validation(format!(
                "Invalid membership tier: '{s}'. Expected one of: free, core, premium"
            ))),
        }
    }
}
