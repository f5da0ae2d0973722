//! Errors returned by pause services.
//!
//! Pause services never log, retry or swallow a failure: every [`PauseError`] goes back
//! to the immediate caller, which uses [`PauseError::kind`] to pick a recovery policy.

use thiserror::Error;

/// Convenient result type for pause service operations.
pub type PauseResult<T> = Result<T, PauseError>;

/// Broad categories of [`PauseError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Pausing is compiled out or disabled by configuration.
    FeatureDisabled,
    /// The request does not fit the current state, e.g. resuming a node that is not held.
    InvalidTransition,
    /// A hold was abandoned because the node is shutting down.
    Cancelled,
}

/// Errors returned by [`PauseService`](crate::pauser::base::PauseService) implementations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PauseError {
    #[error("debug is not enabled")]
    DebugNotEnabled,

    #[error("pause is not allowed")]
    PauseNotAllowed,

    #[error("app is already paused")]
    AlreadyPaused,

    #[error("app is set to pause automatically on each block")]
    PauseIsAutomatic,

    #[error("app is not paused")]
    AppNotPaused,

    #[error("a hold is already pending")]
    HoldAlreadyPending,

    #[error("hold was cancelled by shutdown")]
    Cancelled,
}

impl PauseError {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PauseError::DebugNotEnabled | PauseError::PauseNotAllowed => ErrorKind::FeatureDisabled,
            PauseError::AlreadyPaused
            | PauseError::PauseIsAutomatic
            | PauseError::AppNotPaused
            | PauseError::HoldAlreadyPending => ErrorKind::InvalidTransition,
            PauseError::Cancelled => ErrorKind::Cancelled,
        }
    }
}
