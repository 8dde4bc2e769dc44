//! Image catalog port.
//!
//! Abstracts the external image-search/fetch tool. Production code binds it
//! to a subprocess; tests bind it to scripted stubs.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ImageId;

/// Errors reported by an image catalog backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The search could not be executed or its output was unusable.
    #[error("Search for '{prefix}' failed: {reason}")]
    SearchFailed { prefix: String, reason: String },

    /// A fetch attempt failed. Fetches are safe to retry.
    #[error("Fetch of {id} failed: {reason}")]
    FetchFailed { id: ImageId, reason: String },

    /// The backing tool could not be started at all.
    #[error("Image tool unavailable: {0}")]
    Unavailable(String),
}

/// Search and fetch operations against the image catalog.
///
/// # Contract
///
/// - `search` may be called repeatedly and returns zero or more IDs in the
///   catalog's order. No matches is `Ok(vec![])`, not an error.
/// - `fetch` must be safe to call again for the same ID after a failure.
#[async_trait]
pub trait ImageCatalogPort: Send + Sync {
    /// List image IDs whose name starts with `prefix`.
    async fn search(&self, prefix: &str) -> Result<Vec<ImageId>, CatalogError>;

    /// Fetch (install) a single image.
    async fn fetch(&self, id: &ImageId) -> Result<(), CatalogError>;
}
