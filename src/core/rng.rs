//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Optional seeding**: `None` falls back to OS entropy for
//!   non-reproducible runs
//! - **Serializable**: O(1) state capture and restore
//!
//! Every engine instance owns exactly one `GameRng`; there is no
//! process-wide random state. All post-construction randomness (dice,
//! bit sampling, replenishment seeds) is drawn from that single stream,
//! so the relative order of draws is part of the reproducibility
//! contract.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Upper bound (exclusive) for sub-seeds drawn with [`GameRng::next_seed`].
const SUB_SEED_BOUND: u64 = 1 << 31;

/// Deterministic RNG stream owned by a single engine instance.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG.
    ///
    /// With `Some(seed)` the stream is fully reproducible; with `None`
    /// it is seeded from OS entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { inner }
    }

    /// Generate a uniform integer in the given inclusive range.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Sample `amount` distinct elements uniformly, without replacement.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds `items.len()`.
    pub fn sample<T: Copy>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        use rand::seq::SliceRandom;
        assert!(
            amount <= items.len(),
            "cannot sample {amount} of {} items",
            items.len()
        );
        items
            .choose_multiple(&mut self.inner, amount)
            .copied()
            .collect()
    }

    /// Draw a fresh sub-seed from this stream.
    ///
    /// Used to reseed derived generators (action-queue replenishment)
    /// mid-game. The draw advances this stream like any other.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen_range(0..SUB_SEED_BOUND)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.inner.get_seed(),
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::from_seed(state.seed);
        inner.set_word_pos(state.word_pos);
        Self { inner }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Full ChaCha8 seed (also captures entropy-seeded streams).
    pub seed: [u8; 32],
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
