// file: src/machine/probe.rs
// version: 1.0.0
// guid: 5a81f0d3-e7c2-4b96-a045-19d6c8e2f7b4

//! Outcomes of the existence and liveness probes
//!
//! `exists` and `status` never fail. A failed tool invocation is folded into
//! `Presence::NotFound` or `MachineStatus::Unreachable` instead.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Result of `Machine::exists`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "presence", content = "inspect", rename_all = "snake_case")]
pub enum Presence {
    /// `inspect` succeeded. Holds the parsed JSON, or `Value::Null` when stdout was not JSON.
    Found(Value),
    NotFound,
}

impl Presence {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Result of `Machine::status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineStatus {
    /// Lower-cased, trimmed state reported by the tool, e.g. `running` or `stopped`
    State(String),
    Unreachable,
}

impl MachineStatus {
    pub const UNREACHABLE: &'static str = "unreachable";

    pub fn as_str(&self) -> &str {
        match self {
            Self::State(state) => state,
            Self::Unreachable => Self::UNREACHABLE,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::State(state) if state == "running")
    }
}

impl Serialize for MachineStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(MachineStatus::State("running".into()).to_string(), "running");
        assert_eq!(MachineStatus::Unreachable.to_string(), "unreachable");
        assert!(MachineStatus::State("running".into()).is_running());
        assert!(!MachineStatus::Unreachable.is_running());
        assert_eq!(serde_json::to_value(MachineStatus::Unreachable).unwrap(), "unreachable");
    }

    #[test]
    fn test_presence_serializes_tagged() {
        let json = serde_json::to_value(Presence::NotFound).unwrap();
        assert_eq!(json["presence"], "not_found");
        assert!(!Presence::NotFound.is_found());
    }
}
