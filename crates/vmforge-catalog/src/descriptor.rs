//! Descriptor file parsing.
//!
//! Supported formats are JSON and TOML, chosen by file extension. Both
//! must carry a top-level string field `description`.

use std::path::Path;

use serde::Deserialize;

/// On-disk descriptor format.
///
/// Ordered by precedence: when one stem exists in both formats, JSON wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DescriptorFormat {
    Json,
    Toml,
}

impl DescriptorFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

/// Why a single descriptor could not be used.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("description is missing or blank")]
    MissingDescription,
}

#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    description: Option<String>,
}

/// Parse descriptor `contents` and return its trimmed description.
pub fn parse_descriptor(contents: &str, format: DescriptorFormat) -> Result<String, DescriptorError> {
    let raw: RawDescriptor = match format {
        DescriptorFormat::Json => serde_json::from_str(contents)?,
        DescriptorFormat::Toml => toml::from_str(contents)?,
    };

    raw.description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .ok_or(DescriptorError::MissingDescription)
}
