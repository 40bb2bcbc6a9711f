// file: src/lib.rs
// version: 1.0.0
// guid: 61d2f8a0-7b3e-4c95-a8d4-0e9b5c17f2a6

//! # docker-machine facade
//!
//! Async functions over the `docker-machine` CLI. Each call runs one tool
//! invocation and returns its output parsed into Rust types.
//!
//! ```no_run
//! use docker_machine::Machine;
//!
//! # async fn demo() -> docker_machine::Result<()> {
//! let machine = Machine::new();
//! for m in machine.list().await? {
//!     println!("{} {} {}", m.name, m.state, machine.status(&m.name).await);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod machine;
pub mod utils;

pub use config::MachineConfig;
pub use error::{MachineError, Result};
pub use executor::{CommandExecutor, Invocation, ProcessExecutor};
pub use machine::{Machine, MachineDescriptor, MachineStatus, Presence};
pub use utils::CreateOptions;

/// Version information for the facade
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
