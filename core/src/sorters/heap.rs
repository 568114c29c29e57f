//! Heap sort and top-K extraction over a binary max-heap.
//!
//! The heap is keyed by risk score. Full sort: heapify all n, extract
//! the maximum n times, reverse to ascending — O(n log n), O(n) space.
//! Top-K: heapify all n, extract exactly min(k, n) times — O(n + k
//! log n), never a full sort.

use crate::applicant::Applicant;

pub fn sort_by_risk(applicants: &[Applicant]) -> Vec<Applicant> {
    let mut heap = applicants.to_vec();
    build_max_heap(&mut heap);

    let mut out = Vec::with_capacity(heap.len());
    while let Some(max) = extract_max(&mut heap) {
        out.push(max);
    }
    out.reverse();
    out
}

/// The `min(k, n)` riskiest applicants, descending by risk score.
pub fn top_k(applicants: &[Applicant], k: usize) -> Vec<Applicant> {
    let mut heap = applicants.to_vec();
    build_max_heap(&mut heap);

    let take = k.min(heap.len());
    let mut out = Vec::with_capacity(take);
    for _ in 0..take {
        if let Some(max) = extract_max(&mut heap) {
            out.push(max);
        }
    }
    out
}

/// Bottom-up heapify: sift down every internal node. O(n).
fn build_max_heap(items: &mut [Applicant]) {
    let len = items.len();
    for i in (0..len / 2).rev() {
        sift_down(items, i);
    }
}

/// Swap the root out, shrink the heap, restore the heap property.
fn extract_max(heap: &mut Vec<Applicant>) -> Option<Applicant> {
    if heap.is_empty() {
        return None;
    }
    let last = heap.len() - 1;
    heap.swap(0, last);
    let max = heap.pop();
    if !heap.is_empty() {
        sift_down(heap, 0);
    }
    max
}

fn sift_down(items: &mut [Applicant], mut node: usize) {
    let len = items.len();
    loop {
        let left = 2 * node + 1;
        let right = left + 1;
        let mut largest = node;

        if left < len && items[left].risk_score > items[largest].risk_score {
            largest = left;
        }
        if right < len && items[right].risk_score > items[largest].risk_score {
            largest = right;
        }
        if largest == node {
            break;
        }
        items.swap(node, largest);
        node = largest;
    }
}
