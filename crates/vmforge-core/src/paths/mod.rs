//! Path utilities for vmforge data directories.
//!
//! This module provides the canonical path resolution for all components:
//! - Application data root
//! - Template descriptor directory
//! - Installed images directory
//! - Per-run install logs
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;
mod platform;
mod resolver;

pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
pub use error::PathError;
pub use platform::{
    DATA_DIR_ENV, IMAGES_DIR_ENV, TEMPLATES_DIR_ENV, data_root, images_dir, logs_dir,
    normalize_user_path, templates_dir,
};
pub use resolver::ResolvedPaths;
