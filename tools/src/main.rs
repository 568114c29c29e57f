//! loan-runner: headless batch runner for the loan decisioning core.
//!
//! Usage:
//!   loan-runner --seed 12345 --count 100 --strategy merge
//!   loan-runner --seed 12345 --compare --out decisions.json

use anyhow::{Context, Result};
use loantool_core::{
    applicant::Applicant,
    config::RulesConfig,
    pipeline::{BatchOutcome, DecisionPipeline},
    rng::{RngBank, RngStream},
    sample::SampleGenerator,
    sorters::{heap, SortStrategy, ALL_STRATEGIES},
    tier::RiskTier,
    validate::validate_applicant,
};
use std::env;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let count = parse_arg(&args, "--count", 100usize);
    let range_min = parse_arg(&args, "--range-min", 20.0f64);
    let range_max = parse_arg(&args, "--range-max", 60.0f64);
    let compare = args.iter().any(|a| a == "--compare");
    let show_trail = args.iter().any(|a| a == "--audit-trail");
    let strategy: SortStrategy = args
        .windows(2)
        .find(|w| w[0] == "--strategy")
        .map(|w| w[1].parse())
        .transpose()
        .map_err(|e| anyhow::anyhow!("{e}"))?
        .unwrap_or(SortStrategy::Merge);
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");
    let out = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].as_str());

    println!("loan-runner");
    println!("  seed:      {seed}");
    println!("  count:     {count}");
    println!("  strategy:  {}", strategy.name());
    println!("  data_dir:  {data_dir}");
    println!();

    let config = RulesConfig::load(data_dir)
        .with_context(|| format!("loading tier rules from {data_dir}"))?;

    let rng_bank = RngBank::new(seed);
    let mut sample_rng = rng_bank.for_stream(RngStream::Sample);
    let population = SampleGenerator::generate(count, &mut sample_rng);

    // Drop malformed records up front; one bad applicant never aborts
    // the batch.
    let applicants: Vec<_> = population
        .into_iter()
        .filter(|a| {
            let report = validate_applicant(a);
            for warning in &report.warnings {
                log::warn!("{}: {warning}", a.id);
            }
            if !report.is_valid() {
                log::warn!("{} skipped: {}", a.id, report.errors.join("; "));
            }
            report.is_valid()
        })
        .collect();

    let run_id = format!("run-{}", uuid::Uuid::new_v4());
    let pipeline = DecisionPipeline::new(config, strategy);
    let mut sort_rng = rng_bank.for_stream(RngStream::QuickSort);
    let outcome = pipeline.run(&run_id, &applicants, &mut sort_rng);

    print_summary(&outcome);
    print_range_query(&outcome, range_min, range_max);
    print_top_risks(&applicants);

    if compare {
        compare_strategies(&applicants, seed);
    }
    if show_trail {
        println!();
        print!("{}", outcome.ledger.audit_trail());
    }

    if let Some(path) = out {
        let json = serde_json::to_string_pretty(&outcome.decisions)?;
        std::fs::write(path, json).with_context(|| format!("writing {path}"))?;
        println!("\nDecisions written to {path}");
    }

    Ok(())
}

fn print_summary(outcome: &BatchOutcome) {
    let mut low = 0usize;
    let mut medium = 0usize;
    let mut high = 0usize;
    let mut approved = 0usize;
    for decision in &outcome.ledger {
        match decision.tier {
            RiskTier::Low => low += 1,
            RiskTier::Medium => medium += 1,
            RiskTier::High => high += 1,
        }
        if decision.approved {
            approved += 1;
        }
    }

    println!("=== RUN SUMMARY ===");
    println!("  run_id:     {}", outcome.run_id);
    println!("  applicants: {}", outcome.sorted.len());
    println!("  low risk:   {low}");
    println!("  medium:     {medium}");
    println!("  high risk:  {high}");
    println!("  approved:   {approved}");
    println!("  rejected:   {}", outcome.ledger.len() - approved);
    println!("  index size: {}", outcome.index.len());
    println!("  ledger:     {} entries", outcome.ledger.len());
}

fn print_range_query(outcome: &BatchOutcome, min: f64, max: f64) {
    let in_range = outcome.index.find_in_range(min, max);
    println!();
    println!("=== RANGE QUERY [{min:.1}, {max:.1}] ===");
    println!("  matches: {}", in_range.len());
    for applicant in in_range.iter().take(10) {
        println!("  {} (score {:.1})", applicant.id, applicant.risk_score);
    }
    if in_range.len() > 10 {
        println!("  ... and {} more", in_range.len() - 10);
    }
}

fn print_top_risks(applicants: &[Applicant]) {
    // Extracted via max-heap, not a full sort.
    let top = heap::top_k(applicants, 10);
    println!();
    println!("=== TOP {} BY RISK (heap extraction) ===", top.len());
    for (rank, applicant) in top.iter().enumerate() {
        println!(
            "  {}. {} | score {:.1} | income ${:.0} | credit {}",
            rank + 1,
            applicant.id,
            applicant.risk_score,
            applicant.monthly_income,
            applicant.credit_score
        );
    }
}

/// Time all three strategies on the same population and verify they
/// agree on the final score sequence.
fn compare_strategies(applicants: &[Applicant], seed: u64) {
    let rng_bank = RngBank::new(seed);
    println!();
    println!("=== SORT STRATEGY COMPARISON ===");

    let mut outputs = Vec::new();
    for strategy in ALL_STRATEGIES {
        let mut rng = rng_bank.for_stream(RngStream::QuickSort);
        let start = Instant::now();
        let sorted = strategy.sort_by_risk(applicants, &mut rng);
        let elapsed = start.elapsed();
        println!(
            "  {:<6} {:>10.3} ms",
            strategy.name(),
            elapsed.as_secs_f64() * 1000.0
        );
        outputs.push(sorted);
    }

    let reference: Vec<f64> = outputs[0].iter().map(|a| a.risk_score).collect();
    let identical = outputs[1..]
        .iter()
        .all(|sorted| sorted.iter().map(|a| a.risk_score).eq(reference.iter().copied()));
    println!(
        "  score sequences: {}",
        if identical { "IDENTICAL" } else { "DIFFERENT" }
    );
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
