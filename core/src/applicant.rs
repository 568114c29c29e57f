//! The applicant record consumed by the pipeline.
//!
//! Applicants arrive already eligibility-filtered and already scored;
//! nothing in this crate recomputes eligibility or the score formula.
//! Within the pipeline the record is read-only.

use crate::types::{ApplicantId, RiskScore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Applicant {
    pub id: ApplicantId,
    pub monthly_income: f64,
    pub existing_debt: f64,
    pub credit_score: u32,
    pub employment_months: u32,
    pub requested_amount: f64,
    /// Assigned exactly once, upstream, before the pipeline runs.
    pub risk_score: RiskScore,
}

impl Applicant {
    pub fn debt_to_income_ratio(&self) -> f64 {
        if self.monthly_income <= 0.0 {
            return 0.0;
        }
        self.existing_debt / self.monthly_income
    }
}
