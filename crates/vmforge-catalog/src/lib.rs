//! Template descriptor catalog for vmforge.
//!
//! A templates directory holds one descriptor file per template. The file
//! stem is the template name; the descriptor only has to carry a textual
//! `description`. Everything else in the file is ignored.

#![deny(unused_crate_dependencies)]

mod descriptor;
mod error;
mod scan;

pub use descriptor::{DescriptorError, DescriptorFormat, parse_descriptor};
pub use error::TemplateScanError;
pub use scan::TemplateCatalog;

#[cfg(test)]
use tempfile as _;
