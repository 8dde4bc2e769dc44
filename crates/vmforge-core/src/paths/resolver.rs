//! Resolved path snapshot for the `vmforge paths` command.

use std::path::PathBuf;

use super::{PathError, data_root, images_dir, logs_dir, templates_dir};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data
    pub data_root: PathBuf,
    /// Template descriptor directory
    pub templates_dir: PathBuf,
    /// Directory images are installed into
    pub images_dir: PathBuf,
    /// Per-run install log directory
    pub logs_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with(None, None)
    }

    /// Resolve with explicit directory overrides (from CLI flags).
    pub fn resolve_with(
        templates: Option<&str>,
        images: Option<&str>,
    ) -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            templates_dir: templates_dir(templates)?,
            images_dir: images_dir(images)?,
            logs_dir: logs_dir()?,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "templates_dir = {}", self.templates_dir.display())?;
        writeln!(f, "images_dir = {}", self.images_dir.display())?;
        write!(f, "logs_dir = {}", self.logs_dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_deterministic() {
        let first = ResolvedPaths::resolve().expect("first resolve");
        let second = ResolvedPaths::resolve().expect("second resolve");
        assert_eq!(first, second);
    }

    #[test]
    fn display_format_is_parseable() {
        let paths = ResolvedPaths::resolve_with(Some("/tmp/t"), Some("/tmp/i")).expect("resolve");
        let output = paths.to_string();

        assert!(output.contains("data_root = "));
        assert!(output.contains("templates_dir = /tmp/t"));
        assert!(output.contains("images_dir = /tmp/i"));
        assert!(output.contains("logs_dir = "));
    }
}
