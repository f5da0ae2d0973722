use longblock_config::shared::NodeConfig;
use longblock_config::{Environment, load_config, load_config_from};

use crate::cli::Cli;
use crate::error::NodeResult;

/// Loads the node configuration, applies command line overrides and validates the result.
pub fn load_node_config(cli: &Cli) -> NodeResult<NodeConfig> {
    let mut config = match &cli.config_dir {
        Some(directory) => load_config_from::<NodeConfig>(directory, Environment::load()?)?,
        None => load_config::<NodeConfig>()?,
    };

    cli.apply(&mut config.debug);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::error::NodeError;

    fn config_dir(base: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base.yaml"), base).unwrap();
        dir
    }

    #[test]
    fn flags_override_file_values() {
        let dir = config_dir(
            "debug:\n  pause_allowed: false\n  pause_skip: 4\nblock:\n  interval_ms: 10\n",
        );
        let cli = Cli::try_parse_from([
            "longblock-node",
            "--config-dir",
            dir.path().to_str().unwrap(),
            "--debug.pause-allowed",
        ])
        .unwrap();

        let config = load_node_config(&cli).unwrap();

        assert!(config.debug.pause_allowed);
        assert_eq!(config.debug.pause_skip, 4);
        assert_eq!(config.block.interval_ms, 10);
    }

    #[test]
    fn zero_block_interval_is_rejected() {
        let dir = config_dir("block:\n  interval_ms: 0\n");
        let cli = Cli {
            config_dir: Some(dir.path().to_path_buf()),
            ..Cli::default()
        };

        let err = load_node_config(&cli).unwrap_err();

        assert!(matches!(err, NodeError::Validation(_)));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = TempDir::new().unwrap();
        let cli = Cli {
            config_dir: Some(dir.path().join("missing")),
            ..Cli::default()
        };

        let err = load_node_config(&cli).unwrap_err();

        assert!(matches!(err, NodeError::Config(_)));
    }
}
