//! loantool-core — the loan decisioning pipeline.
//!
//! A batch of already-scored applicants goes through four stages:
//! a pluggable sort by risk score, tier classification, an ordered
//! risk-score index for range queries, and an append-only decision
//! ledger for audit replay. Everything is deterministic: the only
//! randomness (quicksort pivots, sample data) flows through seeded
//! RNG streams.

pub mod applicant;
pub mod classifier;
pub mod config;
pub mod decision;
pub mod error;
pub mod index;
pub mod ledger;
pub mod pipeline;
pub mod rng;
pub mod sample;
pub mod sorters;
pub mod tier;
pub mod types;
pub mod validate;
