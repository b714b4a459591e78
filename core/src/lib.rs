//! Reproducible Random - deterministic cross-platform random numbers
//!
//! Given the same seed, a [`Random`] produces the identical sequence of
//! values on every compiler, standard library and operating system, and its
//! state can be checkpointed and resumed exactly.
//!
//! # Architecture
//!
//! - **rng**: MT19937-64 bit engine and the bounded reduction
//! - **random**: the generator type and its draw operations
//! - **sampling**: Fisher-Yates shuffle and sampling over bounded draws
//! - **state**: text and JSON checkpoints
//! - **seed**: seed provider for self-seeded generators
//! - **compat**: `rand_core` adapter and callable form
//! - **config**: serde configuration
//!
//! # Critical Invariants
//!
//! 1. Bounded integers are `raw % max`, floats are `raw / 2^64`; no
//!    platform distribution is ever involved
//! 2. Engine state advances only through draws
//! 3. `load(save(g)) == g`, and both continue identically

// Module declarations
pub mod compat;
pub mod config;
pub mod error;
pub mod random;
pub mod rng;
pub mod sampling;
pub mod seed;
pub mod state;

// Re-exports for convenience
pub use config::RandomConfig;
pub use error::{RandomError, Result};
pub use random::Random;
pub use rng::Mt64;
pub use sampling::UniformSource;
pub use seed::{get_random_seed, set_random_seeder, SeedProvider};
pub use state::{RandomCheckpoint, RandomSnapshot};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn repro_random(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyRandom>()?;
    m.add_function(wrap_pyfunction!(ffi::get_random_seed, m)?)?;
    Ok(())
}
