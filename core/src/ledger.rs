//! Decision ledger — the append-only audit chain.
//!
//! A singly linked list of loan decisions in the exact order they were
//! produced. Nodes live in an arena and link forward by index, which
//! keeps the classic head/tail/next shape (O(1) append, O(n) indexed
//! lookup, forward-only traversal) in safe Rust. The chain has no
//! cycles and the tail's next link is always empty. Single writer per
//! run, like the risk-score index.

use crate::{
    decision::LoanDecision,
    error::{PipelineError, PipelineResult},
};

struct LedgerNode {
    decision: LoanDecision,
    next: Option<usize>,
}

#[derive(Default)]
pub struct DecisionLedger {
    nodes: Vec<LedgerNode>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl DecisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1) append at the tail.
    pub fn add(&mut self, decision: LoanDecision) {
        let id = self.nodes.len();
        self.nodes.push(LedgerNode {
            decision,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    pub fn add_all(&mut self, decisions: impl IntoIterator<Item = LoanDecision>) {
        for decision in decisions {
            self.add(decision);
        }
    }

    /// Indexed access by O(n) traversal from the head. An index at or
    /// past `len()` is a contract violation and fails distinctly —
    /// silently returning a default here would corrupt the audit trail.
    pub fn get(&self, index: usize) -> PipelineResult<&LoanDecision> {
        if index >= self.len {
            return Err(PipelineError::LedgerIndex {
                index,
                size: self.len,
            });
        }
        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|id| self.nodes[id].next);
        }
        match cursor {
            Some(id) => Ok(&self.nodes[id].decision),
            // Unreachable while the length invariant holds.
            None => Err(PipelineError::LedgerIndex {
                index,
                size: self.len,
            }),
        }
    }

    /// O(n) materialization in insertion order.
    pub fn to_vec(&self) -> Vec<LoanDecision> {
        self.iter().cloned().collect()
    }

    /// Restartable forward iteration in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Human-readable 1-indexed trace of the chain: each entry's
    /// applicant, tier, and successor (or the tail marker).
    pub fn audit_trail(&self) -> String {
        let mut out = String::new();
        out.push_str("Decision Audit Trail (Linked List)\n");
        out.push_str("================================\n");

        let mut cursor = self.head;
        let mut position = 1usize;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            out.push_str(&format!(
                "{position}. {} -> {} | ",
                node.decision.applicant.id, node.decision.tier_label
            ));
            match node.next {
                Some(next_id) => {
                    out.push_str(&format!(
                        "next: {}",
                        self.nodes[next_id].decision.applicant.id
                    ));
                }
                None => out.push_str("(tail)"),
            }
            out.push('\n');
            cursor = node.next;
            position += 1;
        }
        out
    }
}

pub struct Iter<'a> {
    nodes: &'a [LedgerNode],
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a LoanDecision;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.nodes[id];
        self.cursor = node.next;
        Some(&node.decision)
    }
}

impl<'a> IntoIterator for &'a DecisionLedger {
    type Item = &'a LoanDecision;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
