//! Merge sort — top-down divide and conquer.
//!
//! O(n log n) time, O(n) auxiliary space. Stable: equal risk scores
//! keep their input order, which the merge step guarantees by taking
//! from the left run on ties.

use crate::applicant::Applicant;

pub fn sort_by_risk(applicants: &[Applicant]) -> Vec<Applicant> {
    if applicants.len() <= 1 {
        return applicants.to_vec();
    }
    merge_sort(applicants.to_vec())
}

fn merge_sort(mut items: Vec<Applicant>) -> Vec<Applicant> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    merge(merge_sort(items), merge_sort(right))
}

/// Merge two sorted runs by repeatedly taking the smaller head.
/// `<=` on the left head keeps the sort stable.
fn merge(left: Vec<Applicant>, right: Vec<Applicant>) -> Vec<Applicant> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut l = left.next();
    let mut r = right.next();

    loop {
        match (l.take(), r.take()) {
            (Some(a), Some(b)) => {
                if a.risk_score <= b.risk_score {
                    out.push(a);
                    l = left.next();
                    r = Some(b);
                } else {
                    out.push(b);
                    l = Some(a);
                    r = right.next();
                }
            }
            (Some(a), None) => {
                out.push(a);
                out.extend(left);
                break;
            }
            (None, Some(b)) => {
                out.push(b);
                out.extend(right);
                break;
            }
            (None, None) => break,
        }
    }
    out
}
