use std::fmt;

use async_trait::async_trait;

use crate::concurrency::shutdown::ShutdownRx;
use crate::error::PauseResult;

/// Service that can hold the block loop between two blocks.
///
/// The block loop calls [`PauseService::hold_if_paused`] before each block while
/// operators call [`PauseService::pause`] and [`PauseService::resume`] from other
/// tasks.
#[async_trait]
pub trait PauseService: fmt::Debug + Send + Sync {
    /// Returns whether pausing is allowed at all.
    fn pause_allowed(&self) -> bool;

    /// Returns whether every block is held automatically.
    fn pause_on_each_block(&self) -> bool;

    /// Holds the caller until resumed if a pause is due, returning immediately otherwise.
    ///
    /// A shutdown requested on `shutdown_rx` while holding aborts the hold.
    async fn hold_if_paused(&self, shutdown_rx: &mut ShutdownRx) -> PauseResult<()>;

    /// Requests the block loop to hold before its next block.
    fn pause(&self) -> PauseResult<()>;

    /// Releases a block loop that is currently held.
    fn resume(&self) -> PauseResult<()>;
}
