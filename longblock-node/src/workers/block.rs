//! Block production loop.
//!
//! The loop produces one block per tick and runs the debug module before every block.
//! A hold that is cancelled by shutdown is a clean exit, any other hook error stops
//! the node.

use std::time::Duration;

use longblock::concurrency::shutdown::{ShutdownRx, shutdown_requested};
use longblock::error::PauseError;
use longblock::module::DebugModule;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use crate::error::{NodeError, NodeResult};
use crate::workers::base::{Worker, WorkerHandle};

/// Observable state of the block loop.
#[derive(Debug, Clone)]
pub struct BlockLoopState {
    height_rx: watch::Receiver<u64>,
}

impl BlockLoopState {
    /// Returns the height of the last processed block, `0` before the first one.
    pub fn height(&self) -> u64 {
        *self.height_rx.borrow()
    }

    /// Waits until a block at `height` or above has been processed.
    ///
    /// Returns `false` if the loop stopped before reaching it.
    pub async fn wait_for_height(&mut self, height: u64) -> bool {
        self.height_rx
            .wait_for(|current| *current >= height)
            .await
            .is_ok()
    }
}

#[derive(Debug)]
pub struct BlockLoopWorkerHandle {
    state: BlockLoopState,
    handle: Option<JoinHandle<NodeResult<()>>>,
}

impl WorkerHandle<BlockLoopState> for BlockLoopWorkerHandle {
    fn state(&self) -> BlockLoopState {
        self.state.clone()
    }

    async fn wait(mut self) -> NodeResult<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };

        handle
            .await
            .map_err(|err| NodeError::WorkerPanicked(err.to_string()))?
    }
}

/// Worker producing blocks until shutdown.
#[derive(Debug)]
pub struct BlockLoopWorker {
    module: DebugModule,
    interval: Duration,
    shutdown_rx: ShutdownRx,
}

impl BlockLoopWorker {
    pub fn new(module: DebugModule, interval: Duration, shutdown_rx: ShutdownRx) -> Self {
        Self {
            module,
            interval,
            shutdown_rx,
        }
    }

    async fn run(mut self, height_tx: watch::Sender<u64>) -> NodeResult<()> {
        info!(
            interval = ?self.interval,
            module = self.module.name(),
            "starting block loop"
        );

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut height = 0u64;

        loop {
            tokio::select! {
                biased;

                _ = shutdown_requested(&mut self.shutdown_rx) => {
                    info!(height, "shutting down block loop");
                    return Ok(());
                }
                _ = ticker.tick() => {}
            }

            let next_height = height + 1;
            match self.module.begin_block(&mut self.shutdown_rx).await {
                Ok(()) => {}
                Err(PauseError::Cancelled) => {
                    info!(height, "shutting down block loop while paused");
                    return Ok(());
                }
                Err(err) => {
                    error!(height = next_height, error = %err, "begin block hook failed");
                    return Err(NodeError::BlockLoop {
                        height: next_height,
                        source: err,
                    });
                }
            }

            height = next_height;
            height_tx.send_replace(height);
            debug!(height, "block processed");
        }
    }
}

impl Worker<BlockLoopWorkerHandle, BlockLoopState> for BlockLoopWorker {
    type Error = NodeError;

    async fn start(self) -> Result<BlockLoopWorkerHandle, Self::Error> {
        let (height_tx, height_rx) = watch::channel(0);
        let handle = tokio::spawn(self.run(height_tx));

        Ok(BlockLoopWorkerHandle {
            state: BlockLoopState { height_rx },
            handle: Some(handle),
        })
    }
}
