// file: src/logging/mod.rs
// version: 1.0.0
// guid: 8f3b6d20-c1a9-4e74-9d58-b27e0a6f1c39

//! Logging setup for the facade binary

pub mod logger;

pub use logger::{init_logger, with_async_operation_span};
