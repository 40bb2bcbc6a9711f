// file: src/config/loader.rs
// version: 1.0.0
// guid: 4c8d1f62-a93e-47b0-8d25-e61f0b7a3c94

//! Configuration file loading and environment variable substitution

use super::MachineConfig;
use crate::error::{MachineError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// `<config dir>/docker-machine-facade/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docker-machine-facade").join("config.yaml"))
    }

    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<MachineConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            MachineError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let mut config: MachineConfig = serde_yaml::from_str(&expanded)?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load from an explicit path, or from the default location if it exists, or fall back to defaults
    pub fn load_or_default(&self, path: Option<&Path>) -> Result<MachineConfig> {
        if let Some(path) = path {
            return self.load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => self.load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(MachineConfig::from_env())
            }
        }
    }

    /// Expand `${VAR}` references in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| MachineError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let result = re.replace_all(content, |cap: &regex::Captures| {
            match self.env_vars.get(&cap[1]) {
                Some(value) => value.clone(),
                None => {
                    missing_vars.push(cap[1].to_string());
                    String::new()
                }
            }
        });

        if !missing_vars.is_empty() {
            return Err(MachineError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
