#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

//! `vmforge` command-line adapter.
//!
//! Parses arguments, wires the runtime adapters into the install engine
//! (`bootstrap`), and renders results for the terminal.

// Used only by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, InstallArgs, SettingsArgs, ToolArgs};
pub use error::CliError;
pub use parser::Cli;
