// file: src/main.rs
// version: 1.0.0
// guid: 93b8e1d6-4c07-4a2f-85e9-d6a0f7c13b48

//! docker-machine facade - Main entry point

use anyhow::Context;
use clap::Parser;
use docker_machine::{
    cli::{operation_name, run_command, Cli},
    config::loader::ConfigLoader,
    logging::{init_logger, with_async_operation_span},
    Machine,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose, cli.quiet)?;

    let config = ConfigLoader::new()
        .load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let machine = Machine::from_config(config);

    let command = cli.command;
    let operation = operation_name(&command);
    let command_future = with_async_operation_span(operation, move || async move {
        let mut stdout = std::io::stdout().lock();
        run_command(&machine, command, &mut stdout).await
    });

    tokio::select! {
        result = command_future => result.with_context(|| format!("docker-machine {} failed", operation)),
        _ = signal::ctrl_c() => {
            warn!("Interrupted by user");
            std::process::exit(130);
        }
    }
}
