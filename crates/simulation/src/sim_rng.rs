//! Deterministic simulation RNG resource and the tie-break seam used by the
//! step engine.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. The step
//! engine never touches `rand` directly: it asks a [`TieBreak`] source to
//! order a handful of candidate moves, so tests can substitute a fixed order.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;

// ---------------------------------------------------------------------------
// Tie-break sources
// ---------------------------------------------------------------------------

/// Orders a small list of equally ranked candidate moves.
///
/// Called once per cell per step for each randomized choice (sand diagonal,
/// sand water displacement side, smoke upward trio).
pub trait TieBreak {
    fn permute<T>(&mut self, candidates: &mut [T]);
}

/// Leaves candidates in their listed order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedOrder;

impl TieBreak for FixedOrder {
    fn permute<T>(&mut self, _candidates: &mut [T]) {}
}

/// Reverses the listed order. Handy for exercising the "other" branch of a
/// two-way choice in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReversedOrder;

impl TieBreak for ReversedOrder {
    fn permute<T>(&mut self, candidates: &mut [T]) {
        candidates.reverse();
    }
}

// ---------------------------------------------------------------------------
// SimRng resource
// ---------------------------------------------------------------------------

/// Deterministic RNG resource for all simulation randomness.
///
/// Systems that need randomness take `ResMut<SimRng>`; the engine receives it
/// as a `TieBreak` and draws a uniform shuffle per call.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl TieBreak for SimRng {
    fn permute<T>(&mut self, candidates: &mut [T]) {
        candidates.shuffle(&mut self.0);
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
