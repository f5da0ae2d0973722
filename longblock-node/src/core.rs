use std::io;

use anyhow::Context;
use longblock::concurrency::shutdown::{ShutdownTx, create_shutdown_channel};
use longblock::module::DebugModule;
use longblock_api::startup::Application;
use longblock_config::shared::NodeConfig;
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::error::NodeResult;
use crate::workers::base::{Worker, WorkerHandle};
use crate::workers::block::{BlockLoopWorker, BlockLoopWorkerHandle};

/// Starts the node with the provided configuration and runs it until shutdown.
///
/// The control API and the block loop run side by side. A shutdown signal stops the
/// block loop, including while it is held, and then the server.
pub async fn start_node_with_config(config: NodeConfig) -> anyhow::Result<()> {
    info!("starting longblock node");

    log_config(&config);

    let (shutdown_tx, shutdown_rx) = create_shutdown_channel();
    let module = DebugModule::from_config(&config.debug);

    let application = Application::build(&config.api, &module)
        .with_context(|| format!("failed to bind control api on {}", config.api.address()))?;

    let block_loop = BlockLoopWorker::new(module, config.block.interval(), shutdown_rx)
        .start()
        .await?;

    let signal_handle = tokio::spawn(shutdown_on_signal(shutdown_tx.clone()));

    let result = run_until_shutdown(application, block_loop, shutdown_tx).await;

    signal_handle.abort();
    let _ = signal_handle.await;

    result?;

    Ok(())
}

/// Serves the control API while the block loop runs.
///
/// The server is stopped once the block loop returns. A server that exits on its own
/// requests a shutdown of the block loop.
pub async fn run_until_shutdown(
    application: Application,
    block_loop: BlockLoopWorkerHandle,
    shutdown_tx: ShutdownTx,
) -> NodeResult<()> {
    let server_handle = application.server_handle();
    let mut server = tokio::spawn(application.run_until_stopped());
    let block_state = block_loop.state();

    let block_loop = block_loop.wait();
    tokio::pin!(block_loop);

    let result = tokio::select! {
        // The block loop only returns after shutdown or on failure.
        result = &mut block_loop => {
            server_handle.stop(true).await;
            log_server_exit(server.await);
            result
        }
        server_result = &mut server => {
            log_server_exit(server_result);
            warn!("control api stopped, shutting down node");
            shutdown_tx.shutdown();
            block_loop.await
        }
    };

    info!(height = block_state.height(), "node stopped");

    result
}

fn log_server_exit(result: Result<io::Result<()>, JoinError>) {
    match result {
        Ok(Ok(())) => info!("control api stopped"),
        Ok(Err(err)) => warn!(error = %err, "control api stopped with an error"),
        Err(err) => warn!(error = %err, "control api task failed"),
    }
}

fn log_config(config: &NodeConfig) {
    info!(
        pause_allowed = config.debug.pause_allowed,
        pause_on_each_block = config.debug.pause_on_each_block,
        pause_skip = config.debug.pause_skip,
        "debug config"
    );
    info!(address = %config.api.address(), "api config");
    info!(interval_ms = config.block.interval_ms, "block config");
}

async fn shutdown_on_signal(shutdown_tx: ShutdownTx) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => info!("sigint (ctrl+c) received, shutting down node"),
            Err(err) => warn!(error = %err, "failed to listen for ctrl+c, shutting down node"),
        },
        _ = terminate() => info!("sigterm received, shutting down node"),
    }

    shutdown_tx.shutdown();
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(err) => {
            warn!(error = %err, "failed to register sigterm handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use longblock::pauser::gate::Gate;
    use longblock_config::shared::ApiConfig;
    use tokio::time::timeout;

    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    fn ephemeral_api_config() -> ApiConfig {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    async fn start_block_loop(
        module: DebugModule,
        shutdown_tx: &ShutdownTx,
    ) -> BlockLoopWorkerHandle {
        BlockLoopWorker::new(module, Duration::from_millis(1), shutdown_tx.subscribe())
            .start()
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn server_exit_shuts_down_block_loop() {
        let (shutdown_tx, _shutdown_rx) = create_shutdown_channel();
        let module = DebugModule::new(Arc::new(Gate::new(false, false, 0)));
        let application = Application::build(&ephemeral_api_config(), &module).unwrap();
        let server_handle = application.server_handle();
        let block_loop = start_block_loop(module, &shutdown_tx).await;
        let block_state = block_loop.state();

        let node = tokio::spawn(run_until_shutdown(application, block_loop, shutdown_tx));
        server_handle.stop(true).await;

        timeout(WAIT, node).await.unwrap().unwrap().unwrap();
        let mut block_state = block_state;
        assert!(!block_state.wait_for_height(u64::MAX).await);
    }

    #[cfg(feature = "debug")]
    #[tokio::test(flavor = "multi_thread")]
    async fn server_exit_releases_held_block_loop() {
        let (shutdown_tx, _shutdown_rx) = create_shutdown_channel();
        let gate = Arc::new(Gate::new(true, true, 0));
        let module = DebugModule::new(gate.clone());
        let application = Application::build(&ephemeral_api_config(), &module).unwrap();
        let server_handle = application.server_handle();
        let block_loop = start_block_loop(module, &shutdown_tx).await;

        let node = tokio::spawn(run_until_shutdown(application, block_loop, shutdown_tx));
        server_handle.stop(true).await;

        timeout(WAIT, node).await.unwrap().unwrap().unwrap();
        assert!(!gate.is_holding());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn shutdown_stops_server() {
        let (shutdown_tx, _shutdown_rx) = create_shutdown_channel();
        let module = DebugModule::new(Arc::new(Gate::new(false, false, 0)));
        let application = Application::build(&ephemeral_api_config(), &module).unwrap();
        let port = application.port();
        let block_loop = start_block_loop(module, &shutdown_tx).await;

        let node = tokio::spawn(run_until_shutdown(
            application,
            block_loop,
            shutdown_tx.clone(),
        ));
        shutdown_tx.shutdown();

        timeout(WAIT, node).await.unwrap().unwrap().unwrap();
        assert!(std::net::TcpStream::connect(("127.0.0.1", port)).is_err());
    }
}
