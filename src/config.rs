//! Queue configuration and its JSON file handling.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default bound on a stored value: unbounded unless configured
pub const DEFAULT_MAX_VALUE_LEN: usize = usize::MAX;

/// Largest node reservation accepted at creation
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Engine settings applied when a queue is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Values longer than this many bytes are refused on insertion
    pub max_value_len: usize,
    /// Node slots reserved up front; reservation failure fails creation
    pub initial_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_value_len: DEFAULT_MAX_VALUE_LEN,
            initial_capacity: 0,
        }
    }
}

impl QueueConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize queue configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write queue configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read queue configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse queue configuration JSON")?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_value_len == 0 {
            anyhow::bail!("max_value_len must be at least 1");
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            anyhow::bail!(
                "initial_capacity {} exceeds the limit of {}",
                self.initial_capacity,
                MAX_INITIAL_CAPACITY
            );
        }
        Ok(())
    }
}
