//! Adapters for code that expects a generic uniform bit source
//!
//! [`Random`] implements [`rand_core::RngCore`], so it can drive any
//! algorithm written against that trait. Keep in mind that such algorithms
//! decide for themselves how to reduce raw bits, so only the crate's own
//! bounded operations carry the cross-platform reproducibility guarantee.

use rand_core::{impls, RngCore};

use crate::random::Random;
use crate::rng::Mt64;

impl Random {
    /// Smallest raw value the engine produces
    pub const MIN: u64 = Mt64::MIN;

    /// Largest raw value the engine produces
    pub const MAX: u64 = Mt64::MAX;

    /// Callable form of [`Random::get_uint32`]
    ///
    /// # Example
    /// ```
    /// use repro_random::Random;
    ///
    /// let mut rng = Random::new(3);
    /// let mut pick = rng.as_bounded_fn();
    /// assert!(pick(10) < 10);
    /// ```
    pub fn as_bounded_fn(&mut self) -> impl FnMut(u32) -> u32 + '_ {
        move |max| self.get_uint32(max)
    }
}

impl RngCore for Random {
    /// Low 32 bits of one raw draw
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
