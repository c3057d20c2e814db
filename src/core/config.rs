//! Engine configuration with documented constants
//!
//! Tunables that shape round pacing live here. The config is passed into
//! `DeliveryEngine` by value; there is no process-wide instance.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Action points every unit starts a round with before trait increments
pub const BASE_ACTION_POINTS: u32 = 3;

/// Encounter id used when a cell type has no candidate list
pub const GENERIC_ENCOUNTER_ID: &str = "random_encounter";

/// Configuration for the delivery grid engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base action points per round for a unit
    ///
    /// Trait increments from the bound partner are added on top of this.
    /// An unbound unit gets exactly this many.
    pub base_action_points: u32,

    /// Minutes removed from every package timer at each round boundary
    pub package_timer_decay: i32,

    /// Fallback encounter id for terrain without a candidate table
    pub generic_encounter_id: String,

    /// Seed for the encounter RNG (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_action_points: BASE_ACTION_POINTS,
            package_timer_decay: 1,
            generic_encounter_id: GENERIC_ENCOUNTER_ID.to_string(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.base_action_points == 0 {
            return Err(EngineError::InvalidConfig(
                "base_action_points must be positive".into(),
            ));
        }

        if self.package_timer_decay < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "package_timer_decay ({}) must not be negative",
                self.package_timer_decay
            )));
        }

        if self.generic_encounter_id.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "generic_encounter_id must not be empty".into(),
            ));
        }

        Ok(())
    }
}
