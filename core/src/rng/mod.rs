//! Deterministic bit generation and bounded reduction
//!
//! Uses MT19937-64 as the single bit engine.
//! CRITICAL: every bounded value handed out by this crate goes through
//! [`reduction`], never through a platform distribution.

mod mt64;
pub mod reduction;

pub use mt64::{EngineStateError, Mt64, STATE_WORDS};
