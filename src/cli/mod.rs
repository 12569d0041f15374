//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the settings form
//! for build scripts and CI.

pub mod common;
pub mod config;
pub mod decode;
pub mod emit;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
pub use emit::EmitArgs;
pub use validate::ValidateArgs;
