use std::path::PathBuf;

/// Errors that stop a catalog scan as a whole.
///
/// Individual unreadable descriptors never surface here; they are logged
/// and skipped.
#[derive(Debug, thiserror::Error)]
pub enum TemplateScanError {
    #[error("Templates directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Templates path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read templates directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
