//! The random-choice capability and its seeded default.
//!
//! The environment never touches a random number generator directly.  It
//! asks an injected [`UniformChoice`] for an index into a non-empty slice,
//! which keeps passenger generation reproducible under a fixed seed and lets
//! tests script every draw.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform choice from a non-empty set.
pub trait UniformChoice {
    /// Return an index in `0..len`, uniformly.  Callers guarantee `len >= 1`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Pick one element of `items`, or `None` if it is empty.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.choose_index(items.len());
        items.get(i).copied()
    }
}

impl<C: UniformChoice + ?Sized> UniformChoice for &mut C {
    #[inline]
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

impl<C: UniformChoice + ?Sized> UniformChoice for Box<C> {
    #[inline]
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded `SmallRng` used as the environment's default chooser.
///
/// The same seed always yields the same passenger stream for the same call
/// sequence.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for callers that want other distributions
    /// (e.g. a random controller in a demo).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl UniformChoice for SimRng {
    #[inline]
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
