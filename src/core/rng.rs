//! Seeded randomness for dealing roles and for offline players.
//!
//! Every random decision in a game descends from one `u64` seed. Named
//! streams split it so that, for example, giving `Player_3` more chatter
//! never changes who was dealt the werewolf card.
//!
//! ```
//! use werewolf_sim::core::GameRng;
//!
//! let mut deal = GameRng::new(42).for_context("roles");
//! let mut redeal = GameRng::new(42).for_context("roles");
//!
//! assert_eq!(deal.below(100), redeal.below(100));
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// ChaCha8 generator that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a named stream from this generator's seed.
    ///
    /// Uses `FxHasher`, which is unkeyed, so a `(seed, name)` pair maps to the
    /// same stream on every run of the same build target. Its output depends
    /// on pointer width, so 32-bit and 64-bit builds derive different streams.
    #[must_use]
    pub fn for_context(&self, name: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform integer in `0..upper`. `upper` must be non-zero.
    pub fn below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Random element, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
