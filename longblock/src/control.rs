//! Transport independent operator controls.
//!
//! [`ControlService`] turns pause service results into [`ControlResponse`]s. A failure
//! carries both the rendered response and the underlying [`PauseError`], so a transport
//! can report the error while clients that only read the response body still see why the
//! request failed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PauseError;
use crate::pauser::base::PauseService;

const PAUSE_SUCCEEDED_MESSAGE: &str = "Node paused successfully";

const RESUME_SUCCEEDED_MESSAGE: &str = "Node resumed successfully";

/// Outcome of an operator request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResponse {
    pub success: bool,
    pub message: String,
}

impl ControlResponse {
    fn succeeded(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn failed(operation: &str, err: &PauseError) -> Self {
        Self {
            success: false,
            message: format!("{operation} failed: {err}"),
        }
    }
}

/// Failed operator request.
#[derive(Debug, Clone, Error)]
#[error("{}", .response.message)]
pub struct ControlError {
    /// Response rendered for the failure, `success` is always `false`.
    pub response: ControlResponse,
    #[source]
    pub source: PauseError,
}

impl ControlError {
    fn new(operation: &str, source: PauseError) -> Self {
        Self {
            response: ControlResponse::failed(operation, &source),
            source,
        }
    }
}

/// Pause and resume requests as seen by operators.
#[derive(Debug, Clone)]
pub struct ControlService {
    pause_service: Arc<dyn PauseService>,
}

impl ControlService {
    pub fn new(pause_service: Arc<dyn PauseService>) -> Self {
        Self { pause_service }
    }

    /// Requests the node to hold before its next block.
    pub fn pause(&self) -> Result<ControlResponse, ControlError> {
        self.pause_service
            .pause()
            .map_err(|err| ControlError::new("Pause", err))?;

        Ok(ControlResponse::succeeded(PAUSE_SUCCEEDED_MESSAGE))
    }

    /// Releases a held node.
    pub fn resume(&self) -> Result<ControlResponse, ControlError> {
        self.pause_service
            .resume()
            .map_err(|err| ControlError::new("Resume", err))?;

        Ok(ControlResponse::succeeded(RESUME_SUCCEEDED_MESSAGE))
    }
}
