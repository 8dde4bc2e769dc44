//! Template and selection types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A named descriptor with a human-readable description.
///
/// The name is the descriptor filename minus its extension. Templates are
/// immutable once loaded; only templates with a non-empty description are
/// ever constructed by the catalog scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Template {
    /// Template name, used as the catalog search prefix.
    pub name: String,
    /// Free-text description, used for filtering and display.
    pub description: String,
}

impl Template {
    /// Create a new template.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match against the description.
    ///
    /// An empty (or whitespace-only) needle matches every template.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        needle.is_empty()
            || self
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Returned when a selection would contain no templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("selection contains no templates")]
pub struct EmptySelection;

/// Ordered, non-empty set of templates chosen for installation.
///
/// Built once by the selection layer and consumed by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    templates: Vec<Template>,
}

impl Selection {
    /// Build a selection, rejecting an empty template list.
    pub fn new(templates: Vec<Template>) -> Result<Self, EmptySelection> {
        if templates.is_empty() {
            return Err(EmptySelection);
        }
        Ok(Self { templates })
    }

    /// Selection consisting of exactly one template.
    pub fn single(template: Template) -> Self {
        Self {
            templates: vec![template],
        }
    }

    /// Templates in selection order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
