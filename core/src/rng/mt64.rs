//! MT19937-64 bit engine
//!
//! The 64-bit Mersenne Twister with the published parameter set. Its output
//! sequence is fixed by the algorithm and the seed alone, so the same seed
//! produces the same stream on every compiler, target and OS.
//!
//! # Algorithm
//!
//! 312 words of state are regenerated in one block ("twist") every 312
//! draws. Each output word is tempered before being returned.
//!
//! # Determinism
//!
//! Same seed → same sequence of raw 64-bit values. Nothing here reads the
//! host environment.

/// Number of state words.
pub const STATE_WORDS: usize = 312;

const MID: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;
const LOWER_MASK: u64 = 0x0000_0000_7FFF_FFFF;
const INIT_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Reasons a word block cannot be turned back into an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineStateError {
    WrongLength(usize),
    IndexOutOfRange(usize),
    AllZero,
}

impl std::fmt::Display for EngineStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineStateError::WrongLength(len) => {
                write!(f, "expected {} state words, found {}", STATE_WORDS, len)
            }
            EngineStateError::IndexOutOfRange(index) => {
                write!(f, "state index {} exceeds {}", index, STATE_WORDS)
            }
            EngineStateError::AllZero => write!(f, "state words are all zero"),
        }
    }
}

/// 64-bit Mersenne Twister
///
/// # Example
/// ```
/// use repro_random::rng::Mt64;
///
/// let mut engine = Mt64::new(5489);
/// assert_eq!(engine.next_u64(), 14514284786278117030);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt64 {
    words: [u64; STATE_WORDS],
    /// Position of the next word to temper; `STATE_WORDS` means a twist is due
    index: usize,
}

impl Mt64 {
    /// Smallest value `next_u64` can return
    pub const MIN: u64 = 0;

    /// Largest value `next_u64` can return
    pub const MAX: u64 = u64::MAX;

    /// Create an engine from a seed using the standard initialisation
    pub fn new(seed: u64) -> Self {
        let mut words = [0u64; STATE_WORDS];
        words[0] = seed;
        for i in 1..STATE_WORDS {
            let prev = words[i - 1];
            words[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        Self {
            words,
            index: STATE_WORDS,
        }
    }

    /// Rebuild an engine from words previously read through [`Mt64::words`]
    /// and [`Mt64::index`].
    pub fn from_parts(words: &[u64], index: usize) -> Result<Self, EngineStateError> {
        if words.len() != STATE_WORDS {
            return Err(EngineStateError::WrongLength(words.len()));
        }
        if index > STATE_WORDS {
            return Err(EngineStateError::IndexOutOfRange(index));
        }
        // An all-zero block twists into itself and only ever yields zero
        if words.iter().all(|&w| w == 0) {
            return Err(EngineStateError::AllZero);
        }

        let mut block = [0u64; STATE_WORDS];
        block.copy_from_slice(words);
        Ok(Self {
            words: block,
            index,
        })
    }

    /// Generate the next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        if self.index >= STATE_WORDS {
            self.twist();
        }

        let mut y = self.words[self.index];
        self.index += 1;

        y ^= (y >> 29) & 0x5555_5555_5555_5555;
        y ^= (y << 17) & 0x71D6_7FFF_EDA6_0000;
        y ^= (y << 37) & 0xFFF7_EEE0_0000_0000;
        y ^ (y >> 43)
    }

    /// Current state words (for serialization)
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Index of the next word to be tempered (for serialization)
    pub fn index(&self) -> usize {
        self.index
    }

    fn twist(&mut self) {
        for i in 0..STATE_WORDS {
            let x = (self.words[i] & UPPER_MASK)
                | (self.words[(i + 1) % STATE_WORDS] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.words[i] = self.words[(i + MID) % STATE_WORDS] ^ x_a;
        }
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_first_output() {
        let mut engine = Mt64::new(5489);
        assert_eq!(engine.next_u64(), 14514284786278117030);
    }

    #[test]
    fn test_reference_ten_thousandth_output() {
        let mut engine = Mt64::new(5489);
        for _ in 0..9999 {
            engine.next_u64();
        }
        assert_eq!(engine.next_u64(), 9981545732273789042);
    }

    #[test]
    fn test_fresh_engine_twists_on_first_draw() {
        let engine = Mt64::new(1);
        assert_eq!(engine.index(), STATE_WORDS);
    }

    #[test]
    fn test_from_parts_continues_identically() {
        let mut engine = Mt64::new(777);
        for _ in 0..500 {
            engine.next_u64();
        }

        let mut copy = Mt64::from_parts(engine.words(), engine.index()).unwrap();
        assert_eq!(copy, engine);
        for _ in 0..1000 {
            assert_eq!(copy.next_u64(), engine.next_u64());
        }
    }

    #[test]
    fn test_from_parts_rejects_bad_blocks() {
        let engine = Mt64::new(3);
        assert_eq!(
            Mt64::from_parts(&engine.words()[..10], 0),
            Err(EngineStateError::WrongLength(10))
        );
        assert_eq!(
            Mt64::from_parts(engine.words(), STATE_WORDS + 1),
            Err(EngineStateError::IndexOutOfRange(STATE_WORDS + 1))
        );
        assert_eq!(
            Mt64::from_parts(&[0u64; STATE_WORDS], 0),
            Err(EngineStateError::AllZero)
        );
    }
}
