use serde::{Deserialize, Serialize};

/// Configuration of the debug module and its block pause gate.
///
/// Every field defaults to the inactive setting, so a node without a `debug`
/// section never pauses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DebugConfig {
    /// Whether operators may pause and resume block processing at all.
    #[serde(default)]
    pub pause_allowed: bool,
    /// Hold before every block and wait for a resume.
    #[serde(default)]
    pub pause_on_each_block: bool,
    /// Number of initial blocks that are never held.
    #[serde(default)]
    pub pause_skip: u64,
}
