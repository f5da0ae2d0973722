//! longblock node binary.
//!
//! Loads configuration, applies command line overrides, initializes tracing and runs
//! the block loop next to the control API until ctrl+c.

use clap::Parser;
use longblock_config::shared::NodeConfig;
use longblock_telemetry::tracing::init_tracing;
use tracing::error;

use crate::cli::Cli;
use crate::config::load_node_config;
use crate::core::start_node_with_config;
use crate::error::NodeError;

mod cli;
mod config;
mod core;
mod error;
mod workers;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load node config
    let node_config = load_node_config(&cli)?;

    let _log_flusher = init_tracing(env!("CARGO_BIN_NAME")).map_err(NodeError::from)?;

    // We start the runtime.
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(NodeError::from)?
        .block_on(async_main(node_config))?;

    Ok(())
}

async fn async_main(node_config: NodeConfig) -> anyhow::Result<()> {
    if let Err(err) = start_node_with_config(node_config).await {
        error!("{err:#}");
        return Err(err);
    }

    Ok(())
}
