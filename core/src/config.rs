//! Tier rule configuration.
//!
//! Tier boundaries and metadata are injected, not hard-coded policy:
//! the classifier binary-searches whatever boundary table it is given.
//! Rules are ordered ascending; each rule's `upper_bound` is the
//! exclusive score ceiling for its tier, with the last rule open-ended
//! (`null` in JSON) so every clamped score lands somewhere.

use crate::tier::RiskTier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRule {
    pub tier: RiskTier,
    pub label: String,
    pub base_interest_rate: f64,
    /// Exclusive upper score bound; `None` for the final catch-all tier.
    pub upper_bound: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct TierRulesFile {
    tiers: Vec<TierRule>,
    #[serde(default = "default_approval_floor")]
    high_risk_approval_floor: f64,
}

fn default_approval_floor() -> f64 {
    40.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Ascending by upper bound; last entry is the open-ended tier.
    pub tiers: Vec<TierRule>,
    /// A High-tier applicant is approved only at or above this score.
    pub high_risk_approval_floor: f64,
}

impl RulesConfig {
    /// Load from the data/ directory.
    /// In tests, use RulesConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/rules/tier_rules.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: TierRulesFile = serde_json::from_str(&content)?;

        let config = Self {
            tiers: file.tiers,
            high_risk_approval_floor: file.high_risk_approval_floor,
        };
        config.validate().map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
        Ok(config)
    }

    /// The default LOW < 30, MEDIUM < 70, HIGH >= 70 rule set.
    pub fn default_test() -> Self {
        Self {
            tiers: vec![
                TierRule {
                    tier: RiskTier::Low,
                    label: "Low Risk".into(),
                    base_interest_rate: 0.055,
                    upper_bound: Some(30.0),
                },
                TierRule {
                    tier: RiskTier::Medium,
                    label: "Medium Risk".into(),
                    base_interest_rate: 0.095,
                    upper_bound: Some(70.0),
                },
                TierRule {
                    tier: RiskTier::High,
                    label: "High Risk".into(),
                    base_interest_rate: 0.145,
                    upper_bound: None,
                },
            ],
            high_risk_approval_floor: 40.0,
        }
    }

    /// The sorted boundary table the classifier binary-searches.
    /// One entry per bounded rule; the final open-ended rule has none.
    pub fn boundaries(&self) -> Vec<f64> {
        self.tiers.iter().filter_map(|r| r.upper_bound).collect()
    }

    pub fn rule_for(&self, tier: RiskTier) -> Option<&TierRule> {
        self.tiers.iter().find(|r| r.tier == tier)
    }

    fn validate(&self) -> Result<(), String> {
        let Some((last, bounded)) = self.tiers.split_last() else {
            return Err("no tier rules defined".into());
        };
        if last.upper_bound.is_some() {
            return Err("last tier rule must be open-ended (upper_bound: null)".into());
        }
        let mut prev = f64::NEG_INFINITY;
        for rule in bounded {
            let upper = rule
                .upper_bound
                .ok_or_else(|| format!("tier {:?} before the last must be bounded", rule.tier))?;
            if upper <= prev {
                return Err(format!("tier bounds not strictly ascending at {upper}"));
            }
            prev = upper;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        let config = RulesConfig::default_test();
        assert!(config.validate().is_ok());
        assert_eq!(config.boundaries(), vec![30.0, 70.0]);
    }

    #[test]
    fn unsorted_bounds_rejected() {
        let mut config = RulesConfig::default_test();
        config.tiers[0].upper_bound = Some(80.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn bounded_last_tier_rejected() {
        let mut config = RulesConfig::default_test();
        config.tiers[2].upper_bound = Some(100.0);
        assert!(config.validate().is_err());
    }
}
