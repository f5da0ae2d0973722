use std::path::PathBuf;

use clap::Parser;
use longblock_config::shared::DebugConfig;

/// Runs a longblock node.
///
/// Flags take precedence over the `debug` section of the loaded configuration.
#[derive(Debug, Default, Parser)]
#[command(name = "longblock-node", version, about)]
pub struct Cli {
    /// Directory holding the configuration files, `./configuration` by default.
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Allow operators to pause the node before a block.
    #[arg(long = "debug.pause-allowed")]
    pub pause_allowed: bool,

    /// Hold before every block until resumed.
    #[arg(long = "debug.pause-on-each-block")]
    pub pause_on_each_block: bool,

    /// Number of blocks to process before automatic holds start.
    #[arg(long = "debug.pause-skip", value_name = "N")]
    pub pause_skip: Option<u64>,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    ///
    /// Boolean flags can only turn an option on.
    pub fn apply(&self, config: &mut DebugConfig) {
        if self.pause_allowed {
            config.pause_allowed = true;
        }
        if self.pause_on_each_block {
            config.pause_on_each_block = true;
        }
        if let Some(pause_skip) = self.pause_skip {
            config.pause_skip = pause_skip;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "longblock-node",
            "--debug.pause-allowed",
            "--debug.pause-on-each-block",
            "--debug.pause-skip",
            "3",
        ])
        .unwrap();

        assert!(cli.pause_allowed);
        assert!(cli.pause_on_each_block);
        assert_eq!(cli.pause_skip, Some(3));
    }

    #[test]
    fn missing_flags_keep_configuration() {
        let cli = Cli::try_parse_from(["longblock-node"]).unwrap();
        let mut config = DebugConfig {
            pause_allowed: true,
            pause_on_each_block: false,
            pause_skip: 7,
        };

        cli.apply(&mut config);

        assert_eq!(
            config,
            DebugConfig {
                pause_allowed: true,
                pause_on_each_block: false,
                pause_skip: 7,
            }
        );
    }

    #[test]
    fn flags_override_configuration() {
        let cli = Cli::try_parse_from(["longblock-node", "--debug.pause-skip", "0"]).unwrap();
        let mut config = DebugConfig {
            pause_allowed: false,
            pause_on_each_block: true,
            pause_skip: 5,
        };

        cli.apply(&mut config);

        assert_eq!(config.pause_skip, 0);
        assert!(config.pause_on_each_block);
        assert!(!config.pause_allowed);
    }

    #[test]
    fn invalid_skip_is_rejected() {
        assert!(Cli::try_parse_from(["longblock-node", "--debug.pause-skip", "-1"]).is_err());
    }
}
