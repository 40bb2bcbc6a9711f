// file: src/cli/mod.rs
// version: 1.0.0
// guid: 0c5f2e8b-a7d4-4193-b6e0-9f81d3a42c76

//! Command line interface for the docker-machine facade

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{operation_name, run_command};
