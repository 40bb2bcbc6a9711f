// file: src/error.rs
// version: 1.0.0
// guid: 3f1c2a9e-6b4d-4e0a-9c71-52d8e0a4b7f3

use thiserror::Error;

/// Result type alias for the facade
pub type Result<T> = std::result::Result<T, MachineError>;

/// Error types for docker-machine invocations
#[derive(Error, Debug)]
pub enum MachineError {
    /// The tool ran and exited non-zero. `stderr` is the tool's own diagnostic text.
    #[error("Command `{command}` failed (exit code {exit_code:?}): {stderr}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MachineError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Diagnostic text reported by the tool, if this error came from a finished process
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Process { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
