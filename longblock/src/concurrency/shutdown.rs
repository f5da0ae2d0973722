//! Broadcast shutdown signal.
//!
//! The node owns a single [`ShutdownTx`]. Every long-running task subscribes to it and
//! stops once its [`ShutdownRx`] reports the shutdown. The shutdown is sticky: every
//! receiver, including one subscribed afterwards, keeps observing it.

use tokio::sync::watch;

/// Transmitter side of the shutdown channel.
#[derive(Debug, Clone)]
pub struct ShutdownTx(watch::Sender<bool>);

impl ShutdownTx {
    /// Notifies every subscriber that the node is shutting down.
    pub fn shutdown(&self) {
        // `send_replace` succeeds even when no receiver is currently subscribed.
        self.0.send_replace(true);
    }

    /// Creates a new receiver, which observes the shutdown even if it was already requested.
    pub fn subscribe(&self) -> ShutdownRx {
        self.0.subscribe()
    }
}

/// Receiver side of the shutdown channel, `true` once a shutdown was requested.
pub type ShutdownRx = watch::Receiver<bool>;

/// Creates a new shutdown channel.
pub fn create_shutdown_channel() -> (ShutdownTx, ShutdownRx) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTx(tx), rx)
}

/// Resolves once a shutdown has been requested on `shutdown_rx`.
///
/// Resolves immediately, any number of times, after the shutdown was requested. If the
/// transmitter is dropped without ever requesting a shutdown, nobody can cancel anymore
/// and the returned future stays pending forever.
pub async fn shutdown_requested(shutdown_rx: &mut ShutdownRx) {
    if shutdown_rx.wait_for(|requested| *requested).await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn subscribers_observe_shutdown() {
        let (shutdown_tx, mut shutdown_rx) = create_shutdown_channel();
        let mut other_rx = shutdown_tx.subscribe();

        shutdown_tx.shutdown();

        shutdown_requested(&mut shutdown_rx).await;
        shutdown_requested(&mut other_rx).await;
    }

    #[tokio::test]
    async fn shutdown_is_observed_repeatedly() {
        let (shutdown_tx, mut shutdown_rx) = create_shutdown_channel();

        shutdown_tx.shutdown();

        for _ in 0..3 {
            timeout(
                Duration::from_secs(1),
                shutdown_requested(&mut shutdown_rx),
            )
            .await
            .expect("shutdown was already requested");
        }
    }

    #[tokio::test]
    async fn late_subscriber_observes_shutdown() {
        let (shutdown_tx, _shutdown_rx) = create_shutdown_channel();
        shutdown_tx.shutdown();

        let mut late_rx = shutdown_tx.subscribe();
        timeout(Duration::from_secs(1), shutdown_requested(&mut late_rx))
            .await
            .expect("shutdown was already requested");

        // Still observed after the transmitter is gone.
        drop(shutdown_tx);
        timeout(Duration::from_secs(1), shutdown_requested(&mut late_rx))
            .await
            .expect("shutdown was already requested");
    }

    #[tokio::test]
    async fn no_shutdown_keeps_waiting() {
        let (_shutdown_tx, mut shutdown_rx) = create_shutdown_channel();

        let result = timeout(
            Duration::from_millis(50),
            shutdown_requested(&mut shutdown_rx),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn dropped_transmitter_never_requests_shutdown() {
        let (shutdown_tx, mut shutdown_rx) = create_shutdown_channel();
        drop(shutdown_tx);

        let result = timeout(
            Duration::from_millis(50),
            shutdown_requested(&mut shutdown_rx),
        )
        .await;
        assert!(result.is_err());
    }
}
