// file: src/cli/commands.rs
// version: 1.0.0
// guid: d7a91c3e-5b20-4f86-9e4d-c03b8f62a1e5

//! Command implementations for the CLI

use super::args::Commands;
use crate::{
    executor::CommandExecutor,
    machine::{Machine, MachineDescriptor, Presence},
    utils::CreateOptions,
    Result,
};
use std::io::Write;
use tracing::info;

/// Short name used for the operation span
pub fn operation_name(command: &Commands) -> &'static str {
    match command {
        Commands::Ls { .. } => "ls",
        Commands::Find { .. } => "find",
        Commands::Exists { .. } => "exists",
        Commands::Create { .. } => "create",
        Commands::Rm { .. } => "rm",
        Commands::Active => "active",
        Commands::Inspect { .. } => "inspect",
        Commands::Provision { .. } => "provision",
        Commands::RegenerateCerts { .. } => "regenerate-certs",
        Commands::Kill { .. } => "kill",
        Commands::Start { .. } => "start",
        Commands::Stop { .. } => "stop",
        Commands::Restart { .. } => "restart",
        Commands::Upgrade { .. } => "upgrade",
        Commands::Ssh { .. } => "ssh",
        Commands::Scp { .. } => "scp",
        Commands::Url { .. } => "url",
        Commands::Ip { .. } => "ip",
        Commands::Status { .. } => "status",
        Commands::Check => "check",
    }
}

/// Run one subcommand against `machine`, writing its result to `out`
pub async fn run_command<E, W>(machine: &Machine<E>, command: Commands, out: &mut W) -> Result<()>
where
    E: CommandExecutor,
    W: Write,
{
    match command {
        Commands::Ls { json } => {
            let machines = machine.list().await?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&machines)?)?;
            } else {
                write_table(out, &machines)?;
            }
        }
        Commands::Find { name, json } => match machine.find(&name).await? {
            Some(found) if json => writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?,
            Some(found) => write_table(out, std::slice::from_ref(&found))?,
            None => info!("No machine named {}", name),
        },
        Commands::Exists { name } => {
            let presence = machine.exists(&name).await;
            writeln!(out, "{}", matches!(presence, Presence::Found(_)))?;
        }
        Commands::Create { name, driver, options } => {
            let mut create_options = CreateOptions::new();
            if let Some(driver) = driver {
                create_options.insert("driver".to_string(), driver);
            }
            create_options.extend(options);

            info!("Creating machine {}", name);
            write!(out, "{}", machine.create(&name, &create_options).await?)?;
        }
        Commands::Rm { name } => write!(out, "{}", machine.remove(&name).await?)?,
        Commands::Active => write!(out, "{}", machine.active().await?)?,
        Commands::Inspect { name } => match machine.inspect(&name).await? {
            Some(json) => writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?,
            None => writeln!(out, "null")?,
        },
        Commands::Provision { name } => write!(out, "{}", machine.provision(&name).await?)?,
        Commands::RegenerateCerts { name } => {
            write!(out, "{}", machine.regenerate_certs(&name).await?)?
        }
        Commands::Kill { name } => write!(out, "{}", machine.kill(&name).await?)?,
        Commands::Start { name } => write!(out, "{}", machine.start(&name).await?)?,
        Commands::Stop { name } => write!(out, "{}", machine.stop(&name).await?)?,
        Commands::Restart { name } => write!(out, "{}", machine.restart(&name).await?)?,
        Commands::Upgrade { name } => write!(out, "{}", machine.upgrade(&name).await?)?,
        Commands::Ssh { name, command } => {
            write!(out, "{}", machine.ssh(&name, &command.join(" ")).await?)?
        }
        Commands::Scp { source, destination } => {
            write!(out, "{}", machine.scp(&source, &destination).await?)?
        }
        Commands::Url { name } => write!(out, "{}", machine.url(&name).await?)?,
        Commands::Ip { name } => writeln!(out, "{}", machine.ip(&name).await?)?,
        Commands::Status { name } => writeln!(out, "{}", machine.status(&name).await)?,
        Commands::Check => {
            let path = machine.config().resolve_binary()?;
            writeln!(out, "{}", path.display())?;
        }
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, machines: &[MachineDescriptor]) -> Result<()> {
    writeln!(out, "{:<24} {:<12} {:<40}", "NAME", "STATE", "URL")?;
    for m in machines {
        writeln!(out, "{:<24} {:<12} {:<40}", m.name, m.state, m.url)?;
    }
    Ok(())
}
