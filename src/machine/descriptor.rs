// file: src/machine/descriptor.rs
// version: 1.0.0
// guid: c2e95b71-0a3f-4d6e-8b14-f6a7d93e0c58

//! Machine descriptors parsed from `docker-machine ls` output

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// `ls --format` fields projected into each JSON line, in output order
pub const LIST_FIELDS: [&str; 3] = ["Name", "State", "URL"];

/// Go template handed to `docker-machine ls --format`, one JSON object per machine
pub fn list_format() -> &'static str {
    static FORMAT: OnceLock<String> = OnceLock::new();
    FORMAT.get_or_init(|| {
        let fields = LIST_FIELDS
            .iter()
            .map(|field| format!("\"{0}\": \"{{{{.{0}}}}}\"", field))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", fields)
    })
}

/// Name, state and URL of a machine as reported by the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDescriptor {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "State")]
    pub state: String,

    /// Empty when the machine is not running
    #[serde(rename = "URL", alias = "Url", default)]
    pub url: String,
}

impl MachineDescriptor {
    pub fn is_running(&self) -> bool {
        self.state.eq_ignore_ascii_case("running")
    }
}

/// Parse one descriptor per line, skipping blank or malformed lines
pub fn parse_list_output(stdout: &str) -> Vec<MachineDescriptor> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str::<MachineDescriptor>(line) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                debug!("Skipping unparseable ls line {:?}: {}", line, e);
                None
            }
        })
        .collect()
}
