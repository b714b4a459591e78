//! Seeds for self-seeded generators
//!
//! A [`SeedProvider`] is either *Unbound* (the initial state) or *Bound* to
//! a seed function installed by the hosting application, e.g. to route every
//! seed through one place where it is logged.
//!
//! - Unbound: seeds come from a private default generator. That generator
//!   is created on first use, exactly once, from OS entropy.
//! - Bound: seeds come from the installed function.
//!
//! The Unbound → Bound transition happens at most once. There is no way
//! back.
//!
//! Most code should take a `&SeedProvider`; [`SeedProvider::global`] is the
//! instance used by [`Random::self_seeded`] and [`get_random_seed`].

use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RandomError, Result};
use crate::random::Random;

/// Seed function a host can install
pub type SeedFn = Box<dyn Fn() -> u32 + Send + Sync>;

static GLOBAL_PROVIDER: SeedProvider = SeedProvider::new();

pub struct SeedProvider {
    seeder: OnceLock<SeedFn>,
    default_rng: OnceLock<Mutex<Random>>,
}

impl SeedProvider {
    /// Unbound provider
    pub const fn new() -> Self {
        Self {
            seeder: OnceLock::new(),
            default_rng: OnceLock::new(),
        }
    }

    /// Provider already bound to `seeder`
    pub fn with_seeder<F>(seeder: F) -> Self
    where
        F: Fn() -> u32 + Send + Sync + 'static,
    {
        let provider = Self::new();
        let seeder: SeedFn = Box::new(seeder);
        // Fresh OnceLock, cannot already be set
        let _ = provider.seeder.set(seeder);
        provider
    }

    /// Process-wide provider
    pub fn global() -> &'static SeedProvider {
        &GLOBAL_PROVIDER
    }

    pub fn is_bound(&self) -> bool {
        self.seeder.get().is_some()
    }

    /// Install the seed function
    ///
    /// # Errors
    /// [`RandomError::SeederAlreadyBound`] if a function is already
    /// installed; the existing one stays in place.
    pub fn bind<F>(&self, seeder: F) -> Result<()>
    where
        F: Fn() -> u32 + Send + Sync + 'static,
    {
        let seeder: SeedFn = Box::new(seeder);
        self.seeder
            .set(seeder)
            .map_err(|_| RandomError::SeederAlreadyBound)?;
        tracing::info!("seed function bound to provider");
        Ok(())
    }

    /// Issue a seed
    ///
    /// Safe to call from many threads. When unbound, draws are serialized
    /// on the default generator's lock.
    pub fn next_seed(&self) -> u32 {
        if let Some(seeder) = self.seeder.get() {
            let seed = seeder();
            tracing::debug!(seed, source = "bound", "issued random seed");
            return seed;
        }

        let rng = self
            .default_rng
            .get_or_init(|| Mutex::new(Random::new(entropy_seed())));
        let seed = rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_uint32();
        tracing::debug!(seed, source = "default", "issued random seed");
        seed
    }
}

impl Default for SeedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SeedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedProvider")
            .field("bound", &self.is_bound())
            .field("default_rng_initialized", &self.default_rng.get().is_some())
            .finish()
    }
}

/// Seed from the global provider
pub fn get_random_seed() -> u32 {
    SeedProvider::global().next_seed()
}

/// Bind the global provider, see [`SeedProvider::bind`]
pub fn set_random_seeder<F>(seeder: F) -> Result<()>
where
    F: Fn() -> u32 + Send + Sync + 'static,
{
    SeedProvider::global().bind(seeder)
}

fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(e) => {
            let seed = clock_seed();
            tracing::warn!(error = %e, seed, "OS entropy unavailable, seeding from clock");
            seed
        }
    }
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ (u64::from(std::process::id()) << 32)
}
