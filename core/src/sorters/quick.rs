//! Quicksort — randomized pivot, Lomuto partition.
//!
//! O(n log n) average, O(n^2) worst case (bounded in practice by the
//! randomized pivot), O(log n) auxiliary stack. Not stable. Pivot
//! indexes come from the caller's StreamRng, never a platform RNG, so
//! the same seed always produces the same recursion shape.

use crate::{applicant::Applicant, rng::StreamRng};

pub fn sort_by_risk(applicants: &[Applicant], rng: &mut StreamRng) -> Vec<Applicant> {
    let mut work = applicants.to_vec();
    if work.len() > 1 {
        let hi = work.len() - 1;
        quick_sort(&mut work, 0, hi, rng);
    }
    work
}

fn quick_sort(items: &mut [Applicant], lo: usize, hi: usize, rng: &mut StreamRng) {
    if lo >= hi {
        return;
    }
    let pivot = partition(items, lo, hi, rng);
    if pivot > lo {
        quick_sort(items, lo, pivot - 1, rng);
    }
    if pivot < hi {
        quick_sort(items, pivot + 1, hi, rng);
    }
}

/// Pick a pivot uniformly at random in [lo, hi], swap it to the end,
/// then Lomuto-partition the subrange around its score.
fn partition(items: &mut [Applicant], lo: usize, hi: usize, rng: &mut StreamRng) -> usize {
    let pivot_index = rng.next_index(lo, hi);
    items.swap(pivot_index, hi);
    let pivot_score = items[hi].risk_score;

    let mut boundary = lo;
    for j in lo..hi {
        if items[j].risk_score <= pivot_score {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, hi);
    boundary
}
