use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use longblock_config::shared::DebugConfig;

use crate::concurrency::handoff::{Handoff, WaitOutcome};
use crate::concurrency::shutdown::ShutdownRx;
use crate::error::{PauseError, PauseResult};
use crate::pauser::base::PauseService;

/// Pause gate placed in front of every block.
///
/// The gate moves through `idle -> pause requested -> held -> idle`:
/// - [`Gate::pause`] requests a pause, only one request wins until the next hold ends.
/// - [`Gate::hold_if_paused`] parks the block loop if a pause was requested, or on every
///   block when `pause_on_each_block` is set, until [`Gate::resume`] releases it or a
///   shutdown is requested.
/// - The first `skip` blocks are never held.
///
/// Holds that are not due return without blocking or locking, so an idle gate costs the
/// block loop two atomic loads.
#[derive(Debug)]
pub struct Gate {
    /// Whether pausing is allowed at all.
    pause_allowed: bool,
    /// Whether every block is held.
    pause_on_each_block: bool,
    /// Remaining number of blocks that are never held.
    skip: AtomicU64,
    /// Set by a successful pause request and cleared when the hold it caused ends.
    paused: AtomicBool,
    /// Wakes the held block loop.
    resume: Handoff,
}

impl Gate {
    /// Creates a new [`Gate`].
    pub fn new(pause_allowed: bool, pause_on_each_block: bool, skip: u64) -> Self {
        Self {
            pause_allowed,
            pause_on_each_block,
            skip: AtomicU64::new(skip),
            paused: AtomicBool::new(false),
            resume: Handoff::new(),
        }
    }

    /// Creates a [`Gate`] from the debug section of the node configuration.
    pub fn from_config(config: &DebugConfig) -> Self {
        Self::new(
            config.pause_allowed,
            config.pause_on_each_block,
            config.pause_skip,
        )
    }

    /// Returns whether the block loop is currently held.
    pub fn is_holding(&self) -> bool {
        self.resume.is_parked()
    }

    /// Consumes one block of the skip window, returning `false` once it is exhausted.
    fn consume_skip(&self) -> bool {
        self.skip
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |skip| {
                skip.checked_sub(1)
            })
            .is_ok()
    }

    fn hold_due(&self) -> bool {
        self.pause_on_each_block || self.paused.load(Ordering::Acquire)
    }
}

/// Clears the pause request when dropped, so that every hold path, including a dropped
/// hold future, leaves the gate ready for a new pause.
struct PauseRelease<'a>(&'a AtomicBool);

impl Drop for PauseRelease<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[async_trait]
impl PauseService for Gate {
    fn pause_allowed(&self) -> bool {
        self.pause_allowed
    }

    fn pause_on_each_block(&self) -> bool {
        self.pause_on_each_block
    }

    async fn hold_if_paused(&self, shutdown_rx: &mut ShutdownRx) -> PauseResult<()> {
        if !self.pause_allowed {
            return Ok(());
        }

        if self.consume_skip() {
            return Ok(());
        }

        if !self.hold_due() {
            return Ok(());
        }

        let parked = self
            .resume
            .park()
            .map_err(|_| PauseError::HoldAlreadyPending)?;
        let _release = PauseRelease(&self.paused);
        // Rebound after the release guard so the waiter is unparked before the pause
        // request is cleared.
        let mut parked = parked;

        match parked.wait(shutdown_rx).await {
            WaitOutcome::Signalled => Ok(()),
            WaitOutcome::Cancelled => Err(PauseError::Cancelled),
        }
    }

    fn pause(&self) -> PauseResult<()> {
        if !self.pause_allowed {
            return Err(PauseError::PauseNotAllowed);
        }

        if self.pause_on_each_block {
            return Err(PauseError::PauseIsAutomatic);
        }

        self.paused
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| PauseError::AlreadyPaused)
    }

    fn resume(&self) -> PauseResult<()> {
        if !self.pause_allowed {
            return Err(PauseError::PauseNotAllowed);
        }

        if self.resume.signal() {
            Ok(())
        } else {
            Err(PauseError::AppNotPaused)
        }
    }
}
