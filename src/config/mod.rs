// file: src/config/mod.rs
// version: 1.0.0
// guid: 9e07b3c4-58a1-4f2d-b6e9-0d14a7c25f83

//! Facade configuration
//!
//! Which binary to invoke, where it keeps its machine store, and the flags
//! every `create` starts from.

pub mod loader;

use crate::error::{MachineError, Result};
use crate::utils::CreateOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the configured binary
pub const BINARY_ENV_VAR: &str = "DOCKER_MACHINE_BIN";

/// Binary invoked when nothing else is configured
pub const DEFAULT_BINARY: &str = "docker-machine";

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Program name or path of the docker-machine binary
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Passed as the global `-s` flag when set
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Flags applied to every `create`; per-call options override them
    #[serde(default)]
    pub create_defaults: CreateOptions,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            storage_path: None,
            create_defaults: CreateOptions::new(),
        }
    }
}

impl MachineConfig {
    /// Defaults, with the binary taken from `DOCKER_MACHINE_BIN` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(binary) = std::env::var(BINARY_ENV_VAR) {
            if !binary.trim().is_empty() {
                self.binary = binary;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.binary.trim().is_empty() {
            return Err(MachineError::validation("binary must not be empty"));
        }

        if let Some((key, _)) = self
            .create_defaults
            .iter()
            .find(|(key, _)| key.is_empty() || key.starts_with('-') || key.contains(char::is_whitespace))
        {
            return Err(MachineError::validation(format!(
                "invalid create flag name {:?}: use the bare flag name, e.g. `driver`",
                key
            )));
        }

        Ok(())
    }

    /// Locate the configured binary on disk or in `PATH`
    pub fn resolve_binary(&self) -> Result<PathBuf> {
        which::which(&self.binary).map_err(|e| {
            MachineError::config(format!("docker-machine binary {:?} not found: {}", self.binary, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MachineConfig::default();
        assert_eq!(config.binary, "docker-machine");
        assert!(config.storage_path.is_none());
        assert!(config.create_defaults.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dashed_flag_names() {
        let mut config = MachineConfig::default();
        config
            .create_defaults
            .insert("--driver".to_string(), "virtualbox".to_string());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("--driver"));
    }

    #[test]
    fn test_validate_rejects_empty_binary() {
        let config = MachineConfig {
            binary: "  ".to_string(),
            ..MachineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_binary_missing() {
        let config = MachineConfig {
            binary: "definitely-not-a-real-binary-4f2a".to_string(),
            ..MachineConfig::default()
        };
        assert!(config.resolve_binary().is_err());
    }
}
