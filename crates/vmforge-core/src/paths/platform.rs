//! Platform-appropriate path resolution.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Overrides the application data root.
pub const DATA_DIR_ENV: &str = "VMFORGE_DATA_DIR";

/// Overrides the template descriptor directory.
pub const TEMPLATES_DIR_ENV: &str = "VMFORGE_TEMPLATES_DIR";

/// Overrides the directory images are installed into.
pub const IMAGES_DIR_ENV: &str = "VMFORGE_IMAGES_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `VMFORGE_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/vmforge`)
///
/// The directory is not created here; callers use `ensure_directory`.
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return normalize_user_path(&path);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("vmforge"))
}

/// Directory holding template descriptor files.
///
/// An explicit override (e.g. `--templates-dir`) wins over
/// `VMFORGE_TEMPLATES_DIR`, which wins over `<data_root>/templates`.
pub fn templates_dir(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    resolve_dir(explicit, TEMPLATES_DIR_ENV, "templates")
}

/// Directory images are written into by the external tool.
pub fn images_dir(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    resolve_dir(explicit, IMAGES_DIR_ENV, "images")
}

/// Directory holding per-run install logs.
pub fn logs_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("logs"))
}

fn resolve_dir(explicit: Option<&str>, env_key: &str, leaf: &str) -> Result<PathBuf, PathError> {
    if let Some(raw) = explicit {
        return normalize_user_path(raw);
    }
    if let Ok(raw) = env::var(env_key) {
        return normalize_user_path(&raw);
    }
    Ok(data_root()?.join(leaf))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    absolutize(&expanded)
}

fn absolutize(path: &Path) -> Result<PathBuf, PathError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(normalize_user_path("   "), Err(PathError::EmptyPath));
    }

    #[test]
    fn absolute_paths_pass_through() {
        let path = normalize_user_path("/srv/vmforge/templates").unwrap();
        assert_eq!(path, PathBuf::from("/srv/vmforge/templates"));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let path = normalize_user_path("templates").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("templates"));
    }

    #[test]
    fn explicit_templates_dir_wins() {
        let path = templates_dir(Some("/opt/catalog")).unwrap();
        assert_eq!(path, PathBuf::from("/opt/catalog"));
    }
}
