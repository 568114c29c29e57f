//! Deterministic sample population generation.
//!
//! Produces plausible, already-scored applicants for the runner and
//! for tests. All generation is deterministic: same RNG stream, same
//! population.

use crate::{applicant::Applicant, rng::StreamRng};

pub struct SampleGenerator;

impl SampleGenerator {
    /// Generate `count` applicants with ids APP0001, APP0002, ...
    /// Every field stays inside the validator's bounds; risk scores
    /// cover the full [0, 100] domain.
    pub fn generate(count: usize, rng: &mut StreamRng) -> Vec<Applicant> {
        (1..=count)
            .map(|n| Self::generate_one(n, rng))
            .collect()
    }

    fn generate_one(n: usize, rng: &mut StreamRng) -> Applicant {
        let monthly_income = round_cents(rng.next_range(1500.0, 20000.0));
        // Debt skews low; cap below the income sanity check.
        let existing_debt = round_cents(rng.next_range(0.0, monthly_income * 12.0));
        Applicant {
            id: format!("APP{n:04}"),
            monthly_income,
            existing_debt,
            credit_score: 300 + rng.next_u64_below(551) as u32,
            employment_months: rng.next_u64_below(361) as u32,
            requested_amount: round_cents(rng.next_range(1000.0, 150000.0)),
            risk_score: round_tenth(rng.next_range(0.0, 100.0)),
        }
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn round_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
