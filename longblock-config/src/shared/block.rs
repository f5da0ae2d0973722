use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Settings of the block production loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Time in milliseconds between two blocks.
    ///
    /// Default: 1000 (1 second)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl BlockConfig {
    pub const DEFAULT_INTERVAL_MS: u64 = 1_000;

    /// Returns the block interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Ensures the block interval is non-zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_ms == 0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "block.interval_ms".to_string(),
                constraint: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    BlockConfig::DEFAULT_INTERVAL_MS
}
