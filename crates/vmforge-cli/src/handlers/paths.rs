//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use vmforge_core::{CoreError, ResolvedPaths};

use crate::error::CliError;

/// Resolve and display all paths used by vmforge in `key = value` format.
pub fn execute(templates_dir: Option<&str>, images_dir: Option<&str>) -> Result<()> {
    let paths = ResolvedPaths::resolve_with(templates_dir, images_dir)
        .map_err(|e| CliError::from(CoreError::from(e)))?;
    println!("{paths}");
    Ok(())
}
