//! Deterministic random number generation.
//!
//! RULE: Nothing in the pipeline may call a platform RNG.
//! All randomness flows through StreamRng instances derived from the
//! single master seed of a batch run.
//!
//! Each consumer gets its own RNG stream, seeded deterministically
//! from (master_seed, stream_index). This means:
//!   - Quicksort pivot draws never perturb sample generation.
//!   - Each stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream for one pipeline consumer.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream RNG from the master seed and a stable stream
    /// index. The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a usize index in [lo, hi] (inclusive). Used for pivot picks.
    pub fn next_index(&mut self, lo: usize, hi: usize) -> usize {
        assert!(lo <= hi, "lo must be <= hi");
        lo + self.next_u64_below((hi - lo + 1) as u64) as usize
    }

    /// Roll a float in [lo, hi).
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngStream {
    Sample = 0,
    QuickSort = 1,
    // Add new streams here — append only.
}

impl RngStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::QuickSort => "quick_sort",
        }
    }
}

/// All RNG streams for a single batch run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stream(&self, slot: RngStream) -> StreamRng {
        StreamRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}
