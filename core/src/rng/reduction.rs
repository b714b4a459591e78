//! Platform-independent reduction of raw engine output
//!
//! Both functions use only the raw 64-bit value and fixed-width integer
//! arithmetic, so a given raw draw maps to the same result on every host.
//!
//! `uniform_below` is a plain modulo. When `bound` does not divide 2^64 the
//! low residues are very slightly favoured. This bias is kept on purpose:
//! switching to rejection sampling would change the number of raw draws per
//! call and break every recorded sequence.

/// Map a raw draw into `[0, bound)` as `raw % bound`.
///
/// # Panics
/// Panics if `bound` is zero.
///
/// # Example
/// ```
/// use repro_random::rng::reduction::uniform_below;
///
/// assert_eq!(uniform_below(17, 5), 2);
/// ```
#[inline]
pub fn uniform_below(raw: u64, bound: u64) -> u64 {
    assert!(bound > 0, "max must be greater than zero");
    raw % bound
}

/// Map a raw draw into `[0.0, 1.0)`.
///
/// Equal to `raw / 2^64` truncated to the 53 bits an `f64` mantissa holds.
/// Dividing the full 64-bit value as a float would round the largest raw
/// values up to exactly 1.0.
///
/// # Example
/// ```
/// use repro_random::rng::reduction::unit_interval;
///
/// assert_eq!(unit_interval(0), 0.0);
/// assert!(unit_interval(u64::MAX) < 1.0);
/// ```
#[inline]
pub fn unit_interval(raw: u64) -> f64 {
    (raw >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
}
