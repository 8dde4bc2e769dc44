//! Image identifiers and per-image attempt results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token identifying one installable image in a template's search results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// How processing of a single image ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// The fetch succeeded.
    Installed,
    /// Every allowed attempt failed.
    RetriesExhausted,
    /// Load stayed above threshold longer than the configured gate timeout.
    GateTimedOut,
    /// The run was cancelled before the image finished.
    Cancelled,
}

/// Outcome of processing one image ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptResult {
    pub image_id: ImageId,
    pub outcome: AttemptOutcome,
    /// Attempt number reached (1-based). Zero if no fetch was ever issued.
    pub attempts: u32,
}

impl AttemptResult {
    pub const fn new(image_id: ImageId, outcome: AttemptOutcome, attempts: u32) -> Self {
        Self {
            image_id,
            outcome,
            attempts,
        }
    }

    pub const fn success(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Installed)
    }
}
