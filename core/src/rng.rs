//! Deterministic random number generation.
//!
//! RULE: nothing in the world model calls a platform RNG. All randomness
//! flows through streams derived from the single master seed in the
//! world config, so the same seed always builds the same world.
//!
//! Each concern gets its own stream, seeded deterministically from
//! (master_seed XOR stream_slot). Adding a new stream never perturbs
//! the existing ones.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream for a single concern.
pub struct RngStream {
    pub name: &'static str,
    inner:    Pcg64Mcg,
}

impl RngStream {
    /// Derive a stream from the master seed and a stable slot.
    /// The slot must never change once assigned.
    pub fn new(master_seed: u64, slot: StreamSlot) -> Self {
        let derived = master_seed ^ ((slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name:  slot.name(),
            inner: Pcg64Mcg::seed_from_u64(derived),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl std::fmt::Debug for RngStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RngStream").field("name", &self.name).finish()
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries — only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Terrain = 0,
    Spawn = 1,
    // Add new streams here — append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Terrain => "terrain",
            Self::Spawn => "spawn",
        }
    }
}
