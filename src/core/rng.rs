//! Randomness sources for question selection.
//!
//! The round engine never calls ambient random functions. It draws from a
//! `RandomSource`, which is either:
//!
//! - `GameRng`: ChaCha8-backed, deterministic for a given seed
//! - `ScriptedRng`: fully scripted, for tests that need exact draws
//!
//! ```
//! use flag_quiz::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng1.gen_range_usize(0..3), rng2.gen_range_usize(0..3));
//! ```

use std::collections::VecDeque;
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Capability the engine needs from a random number generator.
///
/// Shuffling and index selection are independent draws. The engine
/// never derives one from the other.
pub trait RandomSource {
    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Draw an index uniformly from `range`.
    ///
    /// `range` is never empty when called by the engine.
    fn gen_range_usize(&mut self, range: Range<usize>) -> usize;
}

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded so a round can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

/// Scripted randomness for tests.
///
/// - `shuffle` rotates the slice left by a fixed amount (0 leaves it as is)
/// - `gen_range_usize` returns queued picks in order, clamped into the
///   requested range, then falls back to `range.start`
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rotation: usize,
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create a source that never reorders and always picks index 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotate every shuffled slice left by `rotation`.
    #[must_use]
    pub fn with_rotation(mut self, rotation: usize) -> Self {
        self.rotation = rotation;
        self
    }

    /// Queue index picks, returned one per draw.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Number of queued picks not yet drawn.
    #[must_use]
    pub fn remaining_picks(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        if !items.is_empty() {
            let by = self.rotation % items.len();
            items.rotate_left(by);
        }
    }

    fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        match self.picks.pop_front() {
            Some(pick) => pick.clamp(range.start, range.end.saturating_sub(1).max(range.start)),
            None => range.start,
        }
    }
}
