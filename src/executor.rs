// file: src/executor.rs
// version: 1.0.0
// guid: 7d4a0e15-2c8b-4f93-a6e1-b95c3d80f274

//! Process execution for docker-machine invocations

use crate::error::{MachineError, Result};
use crate::utils::quotify_arg;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error};

/// A single tool invocation: program plus a discrete argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render as a command line, quoting arguments that contain spaces
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quotify_arg)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Trait for running an invocation and capturing its stdout
#[async_trait::async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run to completion. Resolves with raw stdout, or fails with the tool's stderr.
    async fn run(&self, invocation: &Invocation) -> Result<String>;
}

/// Executor that spawns one OS process per invocation, without a shell
#[derive(Debug, Default, Clone)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn run(&self, invocation: &Invocation) -> Result<String> {
        let command_line = invocation.command_line();
        debug!("{}", command_line);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| MachineError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            let exit_code = output.status.code();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            error!("Command failed with exit code {:?}: {}", exit_code, command_line);

            return Err(MachineError::Process {
                command: command_line,
                exit_code,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
