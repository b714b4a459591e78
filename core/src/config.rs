//! Generator configuration
//!
//! ```json
//! { "seed": 12345 }
//! ```
//!
//! Leaving `seed` out (or `null`) selects a self-seeded generator.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RandomError, Result};
use crate::random::Random;
use crate::seed::SeedProvider;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomConfig {
    /// Explicit seed; `None` draws one from a [`SeedProvider`]
    pub seed: Option<u64>,
}

impl RandomConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RandomError::Config(e.to_string()))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| RandomError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Generator for this config, self-seeded from the global provider
    pub fn build(&self) -> Random {
        self.build_with(SeedProvider::global())
    }

    /// Generator for this config, self-seeded from `provider`
    pub fn build_with(&self, provider: &SeedProvider) -> Random {
        match self.seed {
            Some(seed) => Random::new(seed),
            None => {
                let random = Random::from_provider(provider);
                tracing::info!(seed = random.seed(), "no seed configured, using fresh seed");
                random
            }
        }
    }
}
