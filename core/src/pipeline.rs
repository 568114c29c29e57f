//! The decision pipeline — one batch run, end to end.
//!
//! STAGE ORDER (fixed, documented, never reordered):
//!   1. Sort the population by risk score (chosen strategy)
//!   2. Classify every sorted applicant into a decision
//!   3. Build the risk-score index over the sorted population
//!   4. Append every decision, in order, to the ledger
//!
//! RULES:
//!   - Single-threaded, synchronous, no I/O. Long batches are the
//!     caller's problem to offload to a background worker.
//!   - The outcome is returned only when complete. An aborted run
//!     exposes no partial index or ledger state — the caller simply
//!     drops what was never returned.
//!   - All randomness flows through the passed StreamRng.

use crate::{
    applicant::Applicant,
    classifier::RiskClassifier,
    config::RulesConfig,
    decision::LoanDecision,
    index::RiskScoreIndex,
    ledger::DecisionLedger,
    rng::StreamRng,
    sorters::SortStrategy,
    types::RunId,
};

pub struct DecisionPipeline {
    classifier: RiskClassifier,
    strategy: SortStrategy,
}

/// Everything one batch run produces. `decisions` is parallel to
/// `sorted`: decision i was made for sorted applicant i.
pub struct BatchOutcome {
    pub run_id: RunId,
    pub sorted: Vec<Applicant>,
    pub decisions: Vec<LoanDecision>,
    pub index: RiskScoreIndex,
    pub ledger: DecisionLedger,
}

impl DecisionPipeline {
    pub fn new(config: RulesConfig, strategy: SortStrategy) -> Self {
        Self {
            classifier: RiskClassifier::new(config),
            strategy,
        }
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    /// Run one batch. Empty input is a trivial success: empty outcome,
    /// empty index, empty ledger.
    pub fn run(&self, run_id: &str, applicants: &[Applicant], rng: &mut StreamRng) -> BatchOutcome {
        log::info!(
            "batch {run_id}: sorting {} applicants with {} sort",
            applicants.len(),
            self.strategy.name()
        );
        let sorted = self.strategy.sort_by_risk(applicants, rng);

        let decisions = self.classifier.classify(&sorted);
        let approved = decisions.iter().filter(|d| d.approved).count();
        log::info!(
            "batch {run_id}: {} decisions, {approved} approved",
            decisions.len()
        );

        let index = RiskScoreIndex::build(&sorted);

        let mut ledger = DecisionLedger::new();
        ledger.add_all(decisions.iter().cloned());
        log::debug!(
            "batch {run_id}: index {} nodes, ledger {} entries",
            index.len(),
            ledger.len()
        );

        BatchOutcome {
            run_id: run_id.to_string(),
            sorted,
            decisions,
            index,
            ledger,
        }
    }
}
