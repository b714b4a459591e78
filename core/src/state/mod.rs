//! Checkpoint - Save/Load Generator State
//!
//! A saved generator resumes with exactly the draws the original would have
//! produced. Two representations are provided:
//!
//! - the compact text layout in [`codec`], used by `save`/`load` and the
//!   file wrappers
//! - a JSON [`RandomCheckpoint`] carrying a SHA-256 hash of the state, for
//!   embedding in larger serde documents
//!
//! # Critical Invariants
//!
//! - **Round trip**: `load(save(g)) == g` and both continue identically
//! - **No partial loads**: a failed load leaves the target unchanged

pub mod codec;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RandomError, Result};
use crate::random::Random;
use crate::rng::Mt64;

/// Current [`RandomCheckpoint::format_version`]
pub const CHECKPOINT_FORMAT_VERSION: u32 = 1;

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Seed plus full engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomSnapshot {
    pub seed: u64,
    pub index: usize,
    pub words: Vec<u64>,
}

impl From<&Random> for RandomSnapshot {
    fn from(random: &Random) -> Self {
        RandomSnapshot {
            seed: random.seed(),
            index: random.engine().index(),
            words: random.engine().words().to_vec(),
        }
    }
}

impl TryFrom<&RandomSnapshot> for Random {
    type Error = RandomError;

    fn try_from(snapshot: &RandomSnapshot) -> Result<Self> {
        let engine = Mt64::from_parts(&snapshot.words, snapshot.index)
            .map_err(|e| RandomError::Format(e.to_string()))?;
        Ok(Random::from_parts(snapshot.seed, engine))
    }
}

/// JSON checkpoint of a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomCheckpoint {
    pub format_version: u32,
    pub snapshot: RandomSnapshot,
    /// Hex SHA-256 of the snapshot's text encoding
    pub state_hash: String,
}

impl RandomCheckpoint {
    /// Wrap a snapshot, computing its hash
    pub fn new(snapshot: RandomSnapshot) -> Self {
        let state_hash = compute_state_hash(&snapshot);
        Self {
            format_version: CHECKPOINT_FORMAT_VERSION,
            snapshot,
            state_hash,
        }
    }

    /// Check version and hash without building a generator
    pub fn validate(&self) -> Result<()> {
        if self.format_version != CHECKPOINT_FORMAT_VERSION {
            return Err(RandomError::Format(format!(
                "unsupported checkpoint version {} (expected {})",
                self.format_version, CHECKPOINT_FORMAT_VERSION
            )));
        }

        let actual = compute_state_hash(&self.snapshot);
        if actual != self.state_hash {
            return Err(RandomError::Format(format!(
                "state hash mismatch: recorded {}, computed {}",
                self.state_hash, actual
            )));
        }
        Ok(())
    }
}

// ============================================================================
// State Hashing
// ============================================================================

/// Hex SHA-256 of the snapshot's [`codec`] text encoding
///
/// The text layout is fixed, so equal snapshots hash equally on every host.
pub fn compute_state_hash(snapshot: &RandomSnapshot) -> String {
    let mut text = Vec::new();
    // Writing into a Vec cannot fail
    let _ = codec::encode_snapshot(snapshot, &mut text);

    let mut hasher = Sha256::new();
    hasher.update(&text);
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Save / Load
// ============================================================================

impl Random {
    /// Write this generator's state to `writer` in the text layout
    pub fn save<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        codec::encode(self, writer)?;
        tracing::debug!(seed = self.seed(), "saved random state");
        Ok(())
    }

    /// Replace this generator with the state read from `reader`
    ///
    /// On error `self` is unchanged.
    pub fn load<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<()> {
        let snapshot = codec::decode(reader)?;
        *self = Random::try_from(&snapshot)?;
        tracing::debug!(seed = self.seed(), "loaded random state");
        Ok(())
    }

    /// [`Random::save`] to a newly created (or truncated) file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// [`Random::load`] from a file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let mut reader = BufReader::new(File::open(path)?);
        self.load(&mut reader)
    }

    /// Build a generator directly from a stream
    pub fn from_reader<R: BufRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let snapshot = codec::decode(reader)?;
        Random::try_from(&snapshot)
    }

    /// Snapshot plus hash, ready for serde
    pub fn to_checkpoint(&self) -> RandomCheckpoint {
        RandomCheckpoint::new(RandomSnapshot::from(self))
    }

    /// Restore a generator from a validated checkpoint
    pub fn from_checkpoint(checkpoint: &RandomCheckpoint) -> Result<Self> {
        checkpoint.validate()?;
        Random::try_from(&checkpoint.snapshot)
    }

    /// Checkpoint as a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_checkpoint())
            .map_err(|e| RandomError::Format(format!("checkpoint serialization failed: {}", e)))
    }

    /// Restore a generator from [`Random::to_json`] output
    pub fn from_json(json: &str) -> Result<Self> {
        let checkpoint: RandomCheckpoint = serde_json::from_str(json)
            .map_err(|e| RandomError::Format(format!("invalid checkpoint JSON: {}", e)))?;
        Random::from_checkpoint(&checkpoint)
    }
}
