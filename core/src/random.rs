//! Reproducible random number generator
//!
//! [`Random`] pairs a seed with an MT19937-64 engine. All bounded values go
//! through [`crate::rng::reduction`], so the same seed and the same call
//! sequence give the same results on every platform.
//!
//! # Creating a generator
//!
//! - explicit seed: `Random::new(seed)`
//! - self-seeded: `Random::self_seeded()` (or `Random::default()`), which
//!   takes a seed from the process-wide [`SeedProvider`]
//!
//! Tests that use randomness should normally log the seed they ran with so a
//! failure can be replayed with `Random::new(seed)`.
//!
//! # Thread safety
//!
//! A `Random` is an ordinary owned value. Every draw takes `&mut self`, so
//! sharing one instance across threads needs external locking; per-thread
//! instances are usually simpler.

use crate::error::Result;
use crate::rng::reduction::{uniform_below, unit_interval};
use crate::rng::Mt64;
use crate::sampling::{self, UniformSource};
use crate::seed::SeedProvider;

/// Deterministic random number generator
///
/// # Example
/// ```
/// use repro_random::Random;
///
/// let mut rng = Random::new(12345);
/// let die = rng.get_uint32(6) + 1;
/// assert!((1..=6).contains(&die));
///
/// let p = rng.get_real64();
/// assert!((0.0..1.0).contains(&p));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Random {
    seed: u64,
    engine: Mt64,
}

impl Random {
    /// Default bound for [`Random::get_uint32`]
    pub const MAX32: u32 = u32::MAX;

    /// Create a generator from an explicit seed
    ///
    /// Every seed, including zero, is used as given.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            engine: Mt64::new(seed),
        }
    }

    /// Create a generator seeded by the process-wide [`SeedProvider`]
    pub fn self_seeded() -> Self {
        Self::from_provider(SeedProvider::global())
    }

    /// Create a generator seeded by an explicit provider handle
    pub fn from_provider(provider: &SeedProvider) -> Self {
        Self::new(u64::from(provider.next_seed()))
    }

    pub(crate) fn from_parts(seed: u64, engine: Mt64) -> Self {
        Self { seed, engine }
    }

    /// Seed this generator was created with (debugging and logging only)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn engine(&self) -> &Mt64 {
        &self.engine
    }

    #[inline]
    pub(crate) fn next_raw(&mut self) -> u64 {
        self.engine.next_u64()
    }

    /// Value in `[0, max)`, computed as `raw % max`
    ///
    /// # Panics
    /// Panics if `max` is zero.
    ///
    /// # Example
    /// ```
    /// use repro_random::Random;
    ///
    /// let mut rng = Random::new(7);
    /// assert!(rng.get_uint32(10) < 10);
    /// ```
    pub fn get_uint32(&mut self, max: u32) -> u32 {
        assert!(max > 0, "max must be greater than zero");
        let raw = self.next_raw();
        uniform_below(raw, u64::from(max)) as u32
    }

    /// [`Random::get_uint32`] with the default bound [`Random::MAX32`]
    pub fn next_uint32(&mut self) -> u32 {
        self.get_uint32(Self::MAX32)
    }

    /// Value in `[0.0, 1.0)`
    pub fn get_real64(&mut self) -> f64 {
        unit_interval(self.next_raw())
    }

    /// Shuffle `items` in place (Fisher-Yates, `len - 1` draws)
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        sampling::shuffle(self, items);
    }

    /// Pick `n_choices` elements of `population` in random order
    ///
    /// Returns an empty vector without drawing when `n_choices` is zero.
    ///
    /// # Errors
    /// [`crate::RandomError::InvalidArgument`] if `n_choices` exceeds the
    /// population size.
    ///
    /// # Example
    /// ```
    /// use repro_random::Random;
    ///
    /// let mut rng = Random::new(42);
    /// let picked = rng.sample(&[10, 20, 30, 40], 2).unwrap();
    /// assert_eq!(picked.len(), 2);
    /// assert!(rng.sample(&[1, 2], 3).is_err());
    /// ```
    pub fn sample<T: Clone>(&mut self, population: &[T], n_choices: usize) -> Result<Vec<T>> {
        sampling::sample(self, population, n_choices)
    }

    /// Fill `choices` with a random selection from `population`
    ///
    /// `choices` is left untouched on error.
    pub fn sample_into<T: Clone>(&mut self, population: &[T], choices: &mut [T]) -> Result<()> {
        sampling::sample_into(self, population, choices)
    }
}

impl Default for Random {
    /// Self-seeded generator, see [`Random::self_seeded`]
    fn default() -> Self {
        Self::self_seeded()
    }
}

impl UniformSource for Random {
    fn uniform_index(&mut self, bound: usize) -> usize {
        let raw = self.next_raw();
        uniform_below(raw, bound as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_is_explicit() {
        let a = Random::new(0);
        let b = Random::new(0);
        assert_eq!(a.seed(), 0);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "max must be greater than zero")]
    fn test_get_uint32_zero_max_panics() {
        let mut rng = Random::new(12345);
        rng.get_uint32(0);
    }

    #[test]
    fn test_get_uint32_is_raw_modulo() {
        let mut rng = Random::new(5489);
        let mut engine = Mt64::new(5489);
        for max in [1u32, 2, 7, 100, 1_000_000, u32::MAX] {
            assert_eq!(rng.get_uint32(max) as u64, engine.next_u64() % max as u64);
        }
    }

    #[test]
    fn test_each_draw_consumes_one_raw_value() {
        let mut rng = Random::new(99);
        let mut engine = Mt64::new(99);

        rng.get_uint32(10);
        rng.get_real64();
        rng.next_uint32();
        for _ in 0..3 {
            engine.next_u64();
        }
        assert_eq!(rng.engine(), &engine);
    }

    #[test]
    fn test_equality_tracks_consumption() {
        let mut a = Random::new(2024);
        let b = Random::new(2024);
        assert_eq!(a, b);

        a.get_uint32(5);
        assert_ne!(a, b, "Same seed but different history must differ");
    }

    #[test]
    fn test_clone_continues_identically() {
        let mut a = Random::new(31337);
        a.get_real64();
        let mut b = a.clone();
        for _ in 0..100 {
            assert_eq!(a.get_uint32(1000), b.get_uint32(1000));
        }
    }
}
