//! Single slot rendezvous between one parked waiter and one signaler.
//!
//! [`Handoff::signal`] succeeds only if a waiter is parked at that moment and never
//! blocks or queues a signal for a future waiter. Both sides settle races under the
//! same lock, so a signal reported as delivered is always observed by the waiter,
//! even if the waiter's cancellation fires at the same time.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::sync::oneshot;

use crate::concurrency::shutdown::{ShutdownRx, shutdown_requested};

/// Returned by [`Handoff::park`] when another waiter is already parked.
#[derive(Debug, Error)]
#[error("another waiter is already parked on the handoff")]
pub struct AlreadyParked;

/// How a parked wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// A signaler woke the waiter.
    Signalled,
    /// A shutdown was requested before any signal arrived.
    Cancelled,
}

/// Rendezvous point holding at most one parked waiter.
#[derive(Debug, Default)]
pub struct Handoff {
    slot: Mutex<Option<oneshot::Sender<()>>>,
}

impl Handoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks a new waiter, failing if one is already parked.
    ///
    /// The waiter stays parked until it is signaled, its wait is cancelled or the
    /// returned [`Parked`] is dropped.
    pub fn park(&self) -> Result<Parked<'_>, AlreadyParked> {
        let mut slot = self.lock();
        if slot.as_ref().is_some_and(|tx| !tx.is_closed()) {
            return Err(AlreadyParked);
        }

        let (tx, rx) = oneshot::channel();
        *slot = Some(tx);

        Ok(Parked { handoff: self, rx })
    }

    /// Wakes the parked waiter, returning `false` if nobody is parked.
    pub fn signal(&self) -> bool {
        // The send happens while holding the lock, which is what lets a cancelled waiter
        // tell whether it was signaled before it gave up.
        let mut slot = self.lock();
        match slot.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    /// Returns whether a waiter is currently parked.
    pub fn is_parked(&self) -> bool {
        self.lock().as_ref().is_some_and(|tx| !tx.is_closed())
    }

    fn lock(&self) -> MutexGuard<'_, Option<oneshot::Sender<()>>> {
        // The critical sections never panic, so a poisoned slot is still consistent.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A waiter parked on a [`Handoff`].
///
/// Dropping it unparks the waiter, so an abandoned wait never leaves a stale slot
/// behind.
#[derive(Debug)]
pub struct Parked<'a> {
    handoff: &'a Handoff,
    rx: oneshot::Receiver<()>,
}

impl Parked<'_> {
    /// Waits until the handoff is signaled or a shutdown is requested.
    pub async fn wait(&mut self, shutdown_rx: &mut ShutdownRx) -> WaitOutcome {
        tokio::select! {
            biased;

            result = &mut self.rx => {
                // The sender only leaves the slot through `signal`, which sends before
                // releasing the lock, or through our own drop.
                return match result {
                    Ok(()) => WaitOutcome::Signalled,
                    Err(_) => WaitOutcome::Cancelled,
                };
            }

            _ = shutdown_requested(shutdown_rx) => {}
        }

        // The shutdown won the select, but a signaler may have taken our sender in the
        // meantime. If the slot still holds it we unpark, otherwise the signal was
        // already sent and must be honored.
        let mut slot = self.handoff.lock();
        if slot.take().is_some() {
            return WaitOutcome::Cancelled;
        }
        drop(slot);

        match self.rx.try_recv() {
            Ok(()) => WaitOutcome::Signalled,
            Err(_) => WaitOutcome::Cancelled,
        }
    }
}

impl Drop for Parked<'_> {
    fn drop(&mut self) {
        // At most one waiter is parked at a time, so whatever is left in the slot is ours.
        self.handoff.lock().take();
    }
}
