// file: src/machine/mod.rs
// version: 1.0.0
// guid: e813a4f7-2d9c-4b05-91e6-a3c70f58d2b1

//! Async facade over the docker-machine subcommands
//!
//! Every operation runs exactly one tool invocation and holds no state between
//! calls. Failures carry the tool's stderr, except for `exists` and `status`,
//! which report failure through their outcome type.

pub mod descriptor;
pub mod probe;

pub use descriptor::{list_format, parse_list_output, MachineDescriptor};
pub use probe::{MachineStatus, Presence};

use crate::config::MachineConfig;
use crate::error::Result;
use crate::executor::{CommandExecutor, Invocation, ProcessExecutor};
use crate::utils::{flatten_flags, safe_parse, CreateOptions};
use serde_json::Value;
use tracing::debug;

/// Handle for issuing docker-machine commands
#[derive(Debug, Clone)]
pub struct Machine<E = ProcessExecutor> {
    executor: E,
    config: MachineConfig,
}

impl Machine<ProcessExecutor> {
    /// Facade spawning real processes, configured from the environment
    pub fn new() -> Self {
        Self::from_config(MachineConfig::from_env())
    }

    pub fn from_config(config: MachineConfig) -> Self {
        Self::with_executor(ProcessExecutor::new(), config)
    }
}

impl Default for Machine<ProcessExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> Machine<E> {
    pub fn with_executor(executor: E, config: MachineConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// `<binary> [-s <storage>] <subcommand>`
    fn command(&self, subcommand: &str) -> Invocation {
        let mut invocation = Invocation::new(&self.config.binary);
        if let Some(storage) = &self.config.storage_path {
            invocation = invocation
                .arg("-s")
                .arg(storage.to_string_lossy().into_owned());
        }
        invocation.arg(subcommand)
    }

    async fn run(&self, invocation: Invocation) -> Result<String> {
        self.executor.run(&invocation).await
    }

    async fn run_on(&self, subcommand: &str, name: &str) -> Result<String> {
        self.run(self.command(subcommand).arg(name)).await
    }

    /// All machines known to the tool. Lines that do not parse are dropped.
    pub async fn list(&self) -> Result<Vec<MachineDescriptor>> {
        let stdout = self
            .run(self.command("ls").args(["--format", list_format()]))
            .await?;
        Ok(parse_list_output(&stdout))
    }

    /// First listed machine whose name matches exactly
    pub async fn find(&self, name: &str) -> Result<Option<MachineDescriptor>> {
        Ok(self.list().await?.into_iter().find(|m| m.name == name))
    }

    /// Probe for a machine via `inspect`. Never fails.
    pub async fn exists(&self, name: &str) -> Presence {
        match self.inspect(name).await {
            Ok(inspected) => Presence::Found(inspected.unwrap_or(Value::Null)),
            Err(e) => {
                debug!("Machine {} not found: {}", name, e);
                Presence::NotFound
            }
        }
    }

    /// Create a machine. Configured defaults come first; `options` override them in place.
    pub async fn create(&self, name: &str, options: &CreateOptions) -> Result<String> {
        let mut flags = self.config.create_defaults.clone();
        for (key, value) in options {
            flags.insert(key.clone(), value.clone());
        }

        self.run(self.command("create").args(flatten_flags(&flags)).arg(name))
            .await
    }

    /// Forced removal, no confirmation prompt
    pub async fn remove(&self, name: &str) -> Result<String> {
        self.run(self.command("rm").arg("-y").arg(name)).await
    }

    /// Raw name of the active machine as printed by the tool
    pub async fn active(&self) -> Result<String> {
        self.run(self.command("active")).await
    }

    /// Parsed `inspect` JSON, or `None` when stdout is not JSON
    pub async fn inspect(&self, name: &str) -> Result<Option<Value>> {
        Ok(safe_parse(&self.run_on("inspect", name).await?))
    }

    pub async fn provision(&self, name: &str) -> Result<String> {
        self.run_on("provision", name).await
    }

    pub async fn regenerate_certs(&self, name: &str) -> Result<String> {
        self.run(self.command("regenerate-certs").arg("-f").arg(name))
            .await
    }

    pub async fn kill(&self, name: &str) -> Result<String> {
        self.run_on("kill", name).await
    }

    pub async fn start(&self, name: &str) -> Result<String> {
        self.run_on("start", name).await
    }

    pub async fn stop(&self, name: &str) -> Result<String> {
        self.run_on("stop", name).await
    }

    pub async fn restart(&self, name: &str) -> Result<String> {
        self.run_on("restart", name).await
    }

    pub async fn upgrade(&self, name: &str) -> Result<String> {
        self.run_on("upgrade", name).await
    }

    /// Run `command` on the machine over SSH and return its stdout
    pub async fn ssh(&self, name: &str, command: &str) -> Result<String> {
        let mut invocation = self.command("ssh").arg(name);
        if !command.is_empty() {
            invocation = invocation.arg(command);
        }
        self.run(invocation).await
    }

    /// Copy between `[machine:]path` locations
    pub async fn scp(&self, source: &str, destination: &str) -> Result<String> {
        self.run(self.command("scp").args([source, destination]))
            .await
    }

    pub async fn url(&self, name: &str) -> Result<String> {
        self.run_on("url", name).await
    }

    pub async fn ip(&self, name: &str) -> Result<String> {
        Ok(self.run_on("ip", name).await?.trim().to_string())
    }

    /// Lower-cased machine state, or `Unreachable` if the tool could not report one. Never fails.
    pub async fn status(&self, name: &str) -> MachineStatus {
        match self.run_on("status", name).await {
            Ok(stdout) => MachineStatus::State(stdout.to_lowercase().trim().to_string()),
            Err(e) => {
                debug!("Status of {} unavailable: {}", name, e);
                MachineStatus::Unreachable
            }
        }
    }
}
