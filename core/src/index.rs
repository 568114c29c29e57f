//! Risk-score index — an ordered tree over a finalized population.
//!
//! A plain, unbalanced binary search tree keyed on risk score. The
//! index is built once per batch run and then only queried, never
//! deleted from, so no rebalancing is performed: a pre-sorted
//! insertion order degenerates to O(n) height, an accepted trade-off
//! of the batch-rebuild usage. Single writer per run; queries must
//! not be interleaved with inserts from another thread.
//!
//! Ties are deterministic: a score equal to a node's key always
//! descends right, so duplicate scores are never lost.

use crate::{applicant::Applicant, types::RiskScore};

struct Node {
    key: RiskScore,
    applicant: Applicant,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(applicant: Applicant) -> Self {
        Self {
            key: applicant.risk_score,
            applicant,
            left: None,
            right: None,
        }
    }
}

#[derive(Default)]
pub struct RiskScoreIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl RiskScoreIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over an entire population.
    pub fn build(applicants: &[Applicant]) -> Self {
        let mut index = Self::new();
        for applicant in applicants {
            index.insert(applicant.clone());
        }
        index
    }

    /// Descend left for strictly smaller keys, right for
    /// greater-or-equal, until an empty link is found.
    pub fn insert(&mut self, applicant: Applicant) {
        let key = applicant.risk_score;
        let mut link = &mut self.root;
        while let Some(node) = link {
            if key < node.key {
                link = &mut node.left;
            } else {
                link = &mut node.right;
            }
        }
        *link = Some(Box::new(Node::new(applicant)));
        self.len += 1;
    }

    /// All applicants whose risk score lies in [min, max], inclusive.
    /// Matches linear-scan semantics exactly; `min > max` is an empty
    /// result, not an error.
    pub fn find_in_range(&self, min: RiskScore, max: RiskScore) -> Vec<&Applicant> {
        let mut found = Vec::new();
        if min > max {
            return found;
        }
        collect_in_range(&self.root, min, max, &mut found);
        found
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// Pruned in-order traversal: skip the left subtree when every key in
/// it must be below `min`, and the right when above `max`.
fn collect_in_range<'a>(
    link: &'a Option<Box<Node>>,
    min: RiskScore,
    max: RiskScore,
    found: &mut Vec<&'a Applicant>,
) {
    let Some(node) = link else {
        return;
    };
    if node.key >= min {
        collect_in_range(&node.left, min, max, found);
    }
    if node.key >= min && node.key <= max {
        found.push(&node.applicant);
    }
    if node.key <= max {
        collect_in_range(&node.right, min, max, found);
    }
}
