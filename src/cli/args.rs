// file: src/cli/args.rs
// version: 1.0.0
// guid: b4e0c7a2-3f58-4d91-8a6c-1d29e7f05b83

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docker-machine-facade")]
#[command(about = "Run docker-machine subcommands and print parsed results")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML config file (defaults to the user config directory)
    #[arg(short, long, global = true, env = "DOCKER_MACHINE_FACADE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List machines
    Ls {
        #[arg(short, long)]
        json: bool,
    },

    /// Look up one machine from the listing
    Find {
        name: String,

        #[arg(short, long)]
        json: bool,
    },

    /// Report whether a machine exists
    Exists { name: String },

    /// Create a machine
    Create {
        name: String,

        /// Shorthand for `--opt driver=<DRIVER>`
        #[arg(short, long)]
        driver: Option<String>,

        /// Extra create flag as KEY=VALUE, without the leading dashes; repeatable
        #[arg(short = 'o', long = "opt", value_parser = parse_key_val)]
        options: Vec<(String, String)>,
    },

    /// Remove a machine without prompting
    Rm { name: String },

    /// Print the active machine
    Active,

    /// Print a machine's inspect JSON
    Inspect { name: String },

    /// Re-run provisioning on a machine
    Provision { name: String },

    /// Regenerate TLS certificates without prompting
    RegenerateCerts { name: String },

    /// Kill a machine
    Kill { name: String },

    /// Start a machine
    Start { name: String },

    /// Stop a machine
    Stop { name: String },

    /// Restart a machine
    Restart { name: String },

    /// Upgrade Docker on a machine
    Upgrade { name: String },

    /// Run a command on a machine over SSH
    Ssh {
        name: String,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Copy files between machines or the local host
    Scp { source: String, destination: String },

    /// Print a machine's Docker URL
    Url { name: String },

    /// Print a machine's IP address
    Ip { name: String },

    /// Print a machine's state
    Status { name: String },

    /// Check that the docker-machine binary can be found
    Check,
}

/// Parse `KEY=VALUE`, splitting on the first `=`
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;

    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{}`", s));
    }

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("virtualbox-memory=2048").unwrap(),
            ("virtualbox-memory".to_string(), "2048".to_string())
        );
        assert_eq!(
            parse_key_val("engine-opt=log-level=debug").unwrap(),
            ("engine-opt".to_string(), "log-level=debug".to_string())
        );
        assert!(parse_key_val("driver").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn test_cli_parses_create() {
        let cli = Cli::try_parse_from([
            "docker-machine-facade",
            "create",
            "box1",
            "--driver",
            "virtualbox",
            "-o",
            "virtualbox-memory=2048",
        ])
        .unwrap();

        match cli.command {
            Commands::Create { name, driver, options } => {
                assert_eq!(name, "box1");
                assert_eq!(driver.as_deref(), Some("virtualbox"));
                assert_eq!(options, vec![("virtualbox-memory".to_string(), "2048".to_string())]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_ssh_trailing_command() {
        let cli = Cli::try_parse_from(["docker-machine-facade", "ssh", "box1", "ls", "-la", "/tmp"]).unwrap();

        match cli.command {
            Commands::Ssh { name, command } => {
                assert_eq!(name, "box1");
                assert_eq!(command, vec!["ls", "-la", "/tmp"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
