//! The debug module plugs the pause gate into a node.
//!
//! The node calls [`DebugModule::begin_block`] before every block, unconditionally. When
//! the `debug` feature is compiled out the module silently swaps its pause service for an
//! [`InertGate`] and exposes no control service, so neither the block loop nor the API
//! needs to know whether pausing exists.

use std::sync::Arc;

use longblock_config::shared::DebugConfig;
use tracing::info;

use crate::concurrency::shutdown::ShutdownRx;
use crate::control::ControlService;
use crate::error::PauseResult;
use crate::pauser::base::PauseService;
use crate::pauser::gate::Gate;
use crate::pauser::inert::InertGate;

/// Name under which the module registers itself.
pub const MODULE_NAME: &str = "debug";

/// Whether the pause gate is compiled in.
pub const ENABLED: bool = cfg!(feature = "debug");

/// Hook running the pause gate at the beginning of every block.
#[derive(Debug, Clone)]
pub struct DebugModule {
    pause_service: Arc<dyn PauseService>,
}

impl DebugModule {
    /// Creates a module around `pause_service`, or around an [`InertGate`] when the
    /// `debug` feature is disabled.
    pub fn new(pause_service: Arc<dyn PauseService>) -> Self {
        let pause_service = if ENABLED {
            pause_service
        } else {
            Arc::new(InertGate::new())
        };

        Self { pause_service }
    }

    /// Creates a module backed by a [`Gate`] configured from `config`.
    pub fn from_config(config: &DebugConfig) -> Self {
        if ENABLED {
            info!(
                pause_allowed = config.pause_allowed,
                pause_on_each_block = config.pause_on_each_block,
                pause_skip = config.pause_skip,
                "debug module enabled"
            );
        }

        Self::new(Arc::new(Gate::from_config(config)))
    }

    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    /// Returns the pause service used by this module.
    pub fn pause_service(&self) -> Arc<dyn PauseService> {
        self.pause_service.clone()
    }

    /// Runs before every block, holding the caller while the node is paused.
    ///
    /// Errors are returned unchanged, the caller decides whether the block is aborted.
    pub async fn begin_block(&self, shutdown_rx: &mut ShutdownRx) -> PauseResult<()> {
        if !ENABLED {
            return Ok(());
        }

        self.pause_service.hold_if_paused(shutdown_rx).await
    }

    /// Returns the control service to expose to operators, or `None` when the `debug`
    /// feature is disabled and nothing must be registered.
    pub fn control_service(&self) -> Option<ControlService> {
        if !ENABLED {
            return None;
        }

        Some(ControlService::new(self.pause_service.clone()))
    }
}
