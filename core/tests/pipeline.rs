//! End-to-end batch runs: the canonical four-applicant scenario under
//! every strategy, plus empty-batch and ledger/index agreement checks.

use loantool_core::{
    applicant::Applicant,
    config::RulesConfig,
    pipeline::DecisionPipeline,
    rng::{RngBank, RngStream},
    sorters::ALL_STRATEGIES,
    tier::RiskTier,
};

fn scored(id: &str, score: f64) -> Applicant {
    Applicant {
        id: id.to_string(),
        monthly_income: 5500.0,
        existing_debt: 800.0,
        credit_score: 705,
        employment_months: 40,
        requested_amount: 20000.0,
        risk_score: score,
    }
}

fn canonical_batch() -> Vec<Applicant> {
    vec![
        scored("APP001", 72.0),
        scored("APP002", 15.0),
        scored("APP003", 15.0),
        scored("APP004", 50.0),
    ]
}

/// Scores [72, 15, 15, 50] sort to [15, 15, 50, 72]; the 72 applicant
/// is High and approved; a range query [20, 60] returns exactly the
/// score-50 applicant. Holds under all three strategies.
#[test]
fn canonical_scenario_under_every_strategy() {
    for strategy in ALL_STRATEGIES {
        let pipeline = DecisionPipeline::new(RulesConfig::default_test(), strategy);
        let mut rng = RngBank::new(42).for_stream(RngStream::QuickSort);
        let outcome = pipeline.run("canonical-test", &canonical_batch(), &mut rng);

        let scores: Vec<f64> = outcome.sorted.iter().map(|a| a.risk_score).collect();
        assert_eq!(scores, vec![15.0, 15.0, 50.0, 72.0], "{}", strategy.name());

        let high = outcome
            .decisions
            .iter()
            .find(|d| d.applicant.id == "APP001")
            .expect("score-72 applicant classified");
        assert_eq!(high.tier, RiskTier::High);
        assert!(high.approved, "72 >= 40, so High is approved");

        let in_range = outcome.index.find_in_range(20.0, 60.0);
        assert_eq!(in_range.len(), 1, "{}", strategy.name());
        assert_eq!(in_range[0].id, "APP004");
        assert_eq!(in_range[0].risk_score, 50.0);
    }
}

/// Decisions are parallel to the sorted population, and the ledger
/// replays them in exactly that order.
#[test]
fn decisions_parallel_to_sorted_order() {
    let pipeline = DecisionPipeline::new(
        RulesConfig::default_test(),
        loantool_core::sorters::SortStrategy::Merge,
    );
    let mut rng = RngBank::new(9).for_stream(RngStream::QuickSort);
    let outcome = pipeline.run("parallel-test", &canonical_batch(), &mut rng);

    assert_eq!(outcome.decisions.len(), outcome.sorted.len());
    for (applicant, decision) in outcome.sorted.iter().zip(&outcome.decisions) {
        assert_eq!(applicant.id, decision.applicant.id);
    }

    let replayed: Vec<String> = outcome
        .ledger
        .iter()
        .map(|d| d.applicant.id.clone())
        .collect();
    let produced: Vec<String> = outcome
        .decisions
        .iter()
        .map(|d| d.applicant.id.clone())
        .collect();
    assert_eq!(replayed, produced);
    assert_eq!(outcome.ledger.len(), outcome.decisions.len());
}

/// Tier assignment across the canonical batch.
#[test]
fn canonical_tier_assignment() {
    let pipeline = DecisionPipeline::new(
        RulesConfig::default_test(),
        loantool_core::sorters::SortStrategy::Heap,
    );
    let mut rng = RngBank::new(3).for_stream(RngStream::QuickSort);
    let outcome = pipeline.run("tier-test", &canonical_batch(), &mut rng);

    let tiers: Vec<RiskTier> = outcome.decisions.iter().map(|d| d.tier).collect();
    assert_eq!(
        tiers,
        vec![RiskTier::Low, RiskTier::Low, RiskTier::Medium, RiskTier::High]
    );
    // Low and Medium always approve; 72 >= 40 approves the High too.
    assert!(outcome.decisions.iter().all(|d| d.approved));
}

/// An empty batch is a trivial success with empty structures.
#[test]
fn empty_batch_is_trivial_success() {
    let pipeline = DecisionPipeline::new(
        RulesConfig::default_test(),
        loantool_core::sorters::SortStrategy::Quick,
    );
    let mut rng = RngBank::new(1).for_stream(RngStream::QuickSort);
    let outcome = pipeline.run("empty-test", &[], &mut rng);

    assert!(outcome.sorted.is_empty());
    assert!(outcome.decisions.is_empty());
    assert!(outcome.index.is_empty());
    assert!(outcome.ledger.is_empty());
}

/// The audit trail of a run names every applicant in sorted order.
#[test]
fn audit_trail_covers_the_run() {
    let pipeline = DecisionPipeline::new(
        RulesConfig::default_test(),
        loantool_core::sorters::SortStrategy::Merge,
    );
    let mut rng = RngBank::new(4).for_stream(RngStream::QuickSort);
    let outcome = pipeline.run("audit-test", &canonical_batch(), &mut rng);

    let trail = outcome.ledger.audit_trail();
    assert!(trail.contains("1. APP002 -> Low Risk | next: APP003"));
    assert!(trail.contains("4. APP001 -> High Risk | (tail)"));
}
