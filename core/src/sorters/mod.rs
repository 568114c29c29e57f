//! Pluggable sorting strategies.
//!
//! RULE: all three strategies share one contract. Input untouched,
//! output is a new ordering of the same elements, ascending by risk
//! score, and every strategy agrees with the others on the final
//! score sequence for the same input. Merge sort is additionally
//! stable; quick and heap are not required to be.
//!
//! Quicksort is the only randomized strategy and draws its pivots
//! from an explicitly passed StreamRng so sorting stays reproducible.

pub mod heap;
pub mod merge;
pub mod quick;

use crate::{applicant::Applicant, rng::StreamRng};
use serde::{Deserialize, Serialize};

/// The closed set of interchangeable strategies, selected by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    Merge,
    Quick,
    Heap,
}

/// All strategies, in comparison-report order.
pub const ALL_STRATEGIES: [SortStrategy; 3] =
    [SortStrategy::Merge, SortStrategy::Quick, SortStrategy::Heap];

impl SortStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    /// Sort ascending by risk score. Only the quick strategy consumes
    /// randomness from `rng`; the others ignore it.
    pub fn sort_by_risk(&self, applicants: &[Applicant], rng: &mut StreamRng) -> Vec<Applicant> {
        match self {
            Self::Merge => merge::sort_by_risk(applicants),
            Self::Quick => quick::sort_by_risk(applicants, rng),
            Self::Heap => heap::sort_by_risk(applicants),
        }
    }
}

impl std::str::FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merge" => Ok(Self::Merge),
            "quick" => Ok(Self::Quick),
            "heap" => Ok(Self::Heap),
            other => Err(format!("unknown sort strategy '{other}'")),
        }
    }
}
