//! Search configuration
//!
//! Configuration is immutable data handed to an algorithm at construction.
//! It never carries per-search state, so one configured instance can serve
//! any number of searches, including concurrent ones.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

/// Frontier pre-allocation above this is almost certainly a typo
pub const MAX_INITIAL_CAPACITY: usize = 1 << 26;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Configuration for A* searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AStarConfig {
    /// Reject negative or NaN heuristic estimates with `InvalidHeuristic`
    pub validate_heuristic: bool,

    /// Put a finalized vertex back on the frontier when a strictly cheaper
    /// path to it turns up. Only matters for inconsistent heuristics;
    /// disabling it trades optimality for bounded expansions.
    pub reopen_closed: bool,

    /// Pre-allocated frontier and cost-table slots
    pub initial_capacity: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            validate_heuristic: true,
            reopen_closed: true,
            initial_capacity: 64,
        }
    }
}

impl AStarConfig {
    /// Parses a JSON object; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid {
                field: "initial_capacity".to_owned(),
                reason: format!("must not exceed {MAX_INITIAL_CAPACITY}"),
            });
        }
        Ok(())
    }
}
