//! Run configuration
//!
//! The whole configuration surface is one difficulty value plus the scene
//! variant; the seed is optional so an embedding shell can either pin it
//! (replays, tests) or let the run draw one from its clock.

use serde::{Deserialize, Serialize};

use crate::sim::{Difficulty, Variant, World};

/// Configuration for one run, typically supplied by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunConfig {
    /// Difficulty course
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Scene variant
    #[serde(default)]
    pub variant: Variant,
    /// Fixed RNG seed; `None` means the shell picks one at start
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Parse a configuration from JSON, e.g. an embedding host's launch
    /// options. Unknown difficulties/variants are parse errors, not
    /// fallbacks.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Create a world from this configuration. `fallback_seed` is used when
    /// the config does not pin one.
    pub fn start(&self, fallback_seed: u64) -> World {
        World::new(
            self.difficulty,
            self.variant,
            self.seed.unwrap_or(fallback_seed),
        )
    }
}
