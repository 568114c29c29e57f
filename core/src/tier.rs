//! Risk tiers — the three ordered classification buckets.
//!
//! Display labels and base interest rates are injected configuration
//! (see config.rs), not properties of the enum. The enum only carries
//! what is policy-independent: ordering and the limit multiplier.

use serde::{Deserialize, Serialize};

/// Ordering is significant: `High` is the riskiest tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Multiplier applied to the 3-months-of-income base when deriving
    /// a recommended credit limit.
    pub fn limit_multiplier(&self) -> f64 {
        match self {
            Self::Low => 1.5,
            Self::Medium => 1.0,
            Self::High => 0.5,
        }
    }

    /// True if `self` is a strictly riskier tier than `other`.
    pub fn riskier_than(&self, other: RiskTier) -> bool {
        *self > other
    }
}
