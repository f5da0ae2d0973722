use serde::{Deserialize, Serialize};

use crate::Config;
use crate::shared::{ApiConfig, BlockConfig, DebugConfig, ValidationError};

/// Top level configuration of a longblock node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default)]
    pub debug: DebugConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub block: BlockConfig,
}

impl NodeConfig {
    /// Validates every nested section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.block.validate()
    }
}

impl Config for NodeConfig {}
