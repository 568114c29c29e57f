//! Risk tier classification.
//!
//! Tier lookup is a binary search over the sorted boundary table from
//! the injected rule set — O(log k) in the number of tiers. Scores
//! outside [0, 100] are clamped before lookup and logged, never fatal:
//! score validity is an upstream concern and one bad applicant must
//! not abort the rest of the batch.

use crate::{
    applicant::Applicant,
    config::{RulesConfig, TierRule},
    decision::LoanDecision,
    tier::RiskTier,
};

pub struct RiskClassifier {
    config: RulesConfig,
    /// Ascending exclusive upper bounds, one per bounded tier rule.
    boundaries: Vec<f64>,
}

impl RiskClassifier {
    pub fn new(config: RulesConfig) -> Self {
        let boundaries = config.boundaries();
        Self { config, boundaries }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Classify one applicant. Pure in (risk score, rule set): the same
    /// score and configuration always produce the same tier, approval
    /// flag and reason string.
    pub fn classify_single(&self, applicant: &Applicant) -> LoanDecision {
        let raw = applicant.risk_score;
        let score = raw.clamp(0.0, 100.0);
        if score != raw {
            log::warn!(
                "classifier: {} risk score {raw:.1} outside [0,100], clamped to {score:.1}",
                applicant.id
            );
        }

        let rule = self.rule_for_score(score);
        let approved = rule.tier != RiskTier::High || score >= self.config.high_risk_approval_floor;
        let reason = format!("Risk Score: {score:.1} -> {}", rule.label);

        LoanDecision::new(
            applicant.clone(),
            rule.tier,
            rule.label.clone(),
            approved,
            reason,
            rule.base_interest_rate,
        )
    }

    /// Classify a batch, preserving input order.
    pub fn classify(&self, applicants: &[Applicant]) -> Vec<LoanDecision> {
        applicants.iter().map(|a| self.classify_single(a)).collect()
    }

    /// Binary search the boundary table: the matching rule is the first
    /// whose exclusive upper bound exceeds the score, falling through
    /// to the open-ended last rule.
    fn rule_for_score(&self, score: f64) -> &TierRule {
        let idx = self.boundaries.partition_point(|b| *b <= score);
        &self.config.tiers[idx]
    }
}
