use std::future::Future;

use crate::error::NodeResult;

/// Background task of the node.
///
/// Starting a worker consumes it and returns a handle `H` exposing state `S`.
pub trait Worker<H, S>
where
    H: WorkerHandle<S>,
{
    /// Error type returned when worker startup fails.
    type Error;

    /// Starts the worker in the background and returns its handle immediately.
    fn start(self) -> impl Future<Output = Result<H, Self::Error>> + Send;
}

/// Handle for observing and awaiting a running worker.
pub trait WorkerHandle<S> {
    /// Returns a snapshot of the worker state.
    ///
    /// Holding the state does not keep the worker alive.
    fn state(&self) -> S;

    /// Waits for the worker to complete and returns its final result.
    fn wait(self) -> impl Future<Output = NodeResult<()>> + Send;
}
