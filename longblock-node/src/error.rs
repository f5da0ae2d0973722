use std::io;

use longblock::error::PauseError;
use longblock_config::{EnvironmentError, LoadConfigError};
use longblock_config::shared::ValidationError;
use longblock_telemetry::tracing::TracingError;
use thiserror::Error;

/// Result type for node operations.
pub type NodeResult<T> = Result<T, NodeError>;

/// Errors that stop the node.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadConfigError),

    #[error("failed to determine runtime environment: {0}")]
    Environment(#[from] EnvironmentError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to initialize tracing: {0}")]
    Telemetry(#[from] TracingError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("block loop stopped at height {height}: {source}")]
    BlockLoop {
        height: u64,
        #[source]
        source: PauseError,
    },

    #[error("block loop task failed: {0}")]
    WorkerPanicked(String),
}
