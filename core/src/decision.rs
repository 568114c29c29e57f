//! The loan decision record produced by the classifier.
//!
//! Immutable after construction. The recommended limit is derived once
//! in `new()` and is 0 whenever the decision is a rejection, so the
//! `approved == false  =>  recommended_limit == 0` invariant holds by
//! construction.

use crate::{applicant::Applicant, tier::RiskTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanDecision {
    pub applicant: Applicant,
    pub tier: RiskTier,
    pub tier_label: String,
    pub approved: bool,
    pub reason: String,
    pub interest_rate: f64,
    pub recommended_limit: f64,
    pub decided_at: DateTime<Utc>,
}

impl LoanDecision {
    pub fn new(
        applicant: Applicant,
        tier: RiskTier,
        tier_label: String,
        approved: bool,
        reason: String,
        interest_rate: f64,
    ) -> Self {
        let recommended_limit = recommended_limit(&applicant, tier, approved);
        Self {
            applicant,
            tier,
            tier_label,
            approved,
            reason,
            interest_rate,
            recommended_limit,
            decided_at: Utc::now(),
        }
    }

    /// Standard amortized monthly payment over `term_months`.
    /// `None` for rejections and degenerate terms.
    pub fn monthly_payment(&self, term_months: u32) -> Option<f64> {
        if !self.approved || self.recommended_limit <= 0.0 || term_months == 0 {
            return None;
        }
        let monthly_rate = self.interest_rate / 12.0;
        if monthly_rate == 0.0 {
            return Some(self.recommended_limit / f64::from(term_months));
        }
        let growth = (1.0 + monthly_rate).powi(term_months as i32);
        Some(self.recommended_limit * monthly_rate * growth / (growth - 1.0))
    }

    pub fn requested_to_recommended_ratio(&self) -> f64 {
        if self.applicant.requested_amount == 0.0 {
            return 0.0;
        }
        self.recommended_limit / self.applicant.requested_amount
    }
}

/// 3 months of income scaled by the tier multiplier, capped at 120% of
/// the requested amount. Always 0 for rejections, never negative.
fn recommended_limit(applicant: &Applicant, tier: RiskTier, approved: bool) -> f64 {
    if !approved {
        return 0.0;
    }
    let base = applicant.monthly_income * 3.0 * tier.limit_multiplier();
    let max_allowed = applicant.requested_amount * 1.2;
    base.min(max_allowed).max(0.0)
}

impl std::fmt::Display for LoanDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LoanDecision [ID: {}, Risk: {}, Approved: {}, Limit: ${:.2}, Reason: {}]",
            self.applicant.id,
            self.tier_label,
            if self.approved { "YES" } else { "NO" },
            self.recommended_limit,
            self.reason,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(income: f64, requested: f64) -> Applicant {
        Applicant {
            id: "APP001".into(),
            monthly_income: income,
            existing_debt: 0.0,
            credit_score: 700,
            employment_months: 24,
            requested_amount: requested,
            risk_score: 20.0,
        }
    }

    #[test]
    fn rejection_always_has_zero_limit() {
        let d = LoanDecision::new(
            applicant(5000.0, 20000.0),
            RiskTier::High,
            "High Risk".into(),
            false,
            "test".into(),
            0.145,
        );
        assert_eq!(d.recommended_limit, 0.0);
        assert_eq!(d.monthly_payment(36), None);
    }

    #[test]
    fn limit_is_income_base_capped_by_requested() {
        // Low tier: 3 * 5000 * 1.5 = 22500, cap 1.2 * 20000 = 24000.
        let d = LoanDecision::new(
            applicant(5000.0, 20000.0),
            RiskTier::Low,
            "Low Risk".into(),
            true,
            "test".into(),
            0.055,
        );
        assert_eq!(d.recommended_limit, 22500.0);

        // Small request: cap binds at 1.2 * 1000 = 1200.
        let d = LoanDecision::new(
            applicant(5000.0, 1000.0),
            RiskTier::Low,
            "Low Risk".into(),
            true,
            "test".into(),
            0.055,
        );
        assert_eq!(d.recommended_limit, 1200.0);
    }

    #[test]
    fn monthly_payment_amortizes() {
        let d = LoanDecision::new(
            applicant(5000.0, 20000.0),
            RiskTier::Medium,
            "Medium Risk".into(),
            true,
            "test".into(),
            0.12,
        );
        // 3 * 5000 * 1.0 = 15000 principal at 1% monthly over 12 months.
        let payment = d.monthly_payment(12).expect("approved");
        assert!((payment - 1332.74).abs() < 0.5, "payment was {payment}");
        // Total repaid must exceed the principal.
        assert!(payment * 12.0 > d.recommended_limit);
    }
}
