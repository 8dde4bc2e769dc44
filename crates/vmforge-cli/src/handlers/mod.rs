//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>` (async where they run the engine)
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call into the catalog or install engine
//!   3. Format output for the terminal

pub mod check_deps;
pub mod install;
pub mod list;
pub mod paths;
