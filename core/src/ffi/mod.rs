//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: only the generator's public operations
//! 2. **Python objects stay opaque**: sampling and shuffling work on
//!    index permutations, so element types never cross the boundary
//! 3. **Safe errors**: every Rust error or precondition becomes a Python
//!    exception, never a panic

pub mod random;
pub mod types;

use pyo3::prelude::*;

/// Seed from the process-wide provider
#[pyfunction]
pub fn get_random_seed() -> u32 {
    crate::seed::get_random_seed()
}
