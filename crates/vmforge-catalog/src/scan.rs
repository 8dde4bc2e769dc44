//! Templates directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vmforge_core::{Selection, Template};

use crate::descriptor::{DescriptorError, DescriptorFormat, parse_descriptor};
use crate::error::TemplateScanError;

/// Templates loaded from one directory, sorted by name.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    dir: PathBuf,
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Scan `dir` for descriptor files.
    ///
    /// Only the top level is read. Files with an unknown extension are
    /// ignored silently; unreadable or description-less descriptors are
    /// logged and skipped.
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self, TemplateScanError> {
        let dir = dir.as_ref();

        if !dir.exists() {
            return Err(TemplateScanError::DirectoryNotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(TemplateScanError::NotADirectory(dir.to_path_buf()));
        }

        let read_err = |source| TemplateScanError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut found = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(format) = DescriptorFormat::from_path(&path) else {
                continue;
            };
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match load_description(&path, format) {
                Ok(description) => found.push((Template::new(name, description), format)),
                Err(LoadError::Descriptor(DescriptorError::MissingDescription)) => {
                    debug!(path = %path.display(), "Skipping descriptor without description");
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable descriptor");
                }
            }
        }

        found.sort_by(|(a, a_fmt), (b, b_fmt)| a.name.cmp(&b.name).then(a_fmt.cmp(b_fmt)));
        found.dedup_by(|(a, _), (b, _)| a.name == b.name);
        let templates: Vec<Template> = found.into_iter().map(|(t, _)| t).collect();

        debug!(dir = %dir.display(), count = templates.len(), "Scanned templates directory");
        Ok(Self {
            dir: dir.to_path_buf(),
            templates,
        })
    }

    /// Build a catalog from already-loaded templates.
    pub fn from_templates(dir: impl Into<PathBuf>, mut templates: Vec<Template>) -> Self {
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            dir: dir.into(),
            templates,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates whose description contains `needle`, case-insensitively.
    ///
    /// A blank needle returns everything.
    pub fn filter(&self, needle: &str) -> Vec<Template> {
        self.templates
            .iter()
            .filter(|t| t.matches(needle))
            .cloned()
            .collect()
    }

    /// Look up a template by exact name.
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Selection of every template matching `needle`, or `None` if nothing matches.
    pub fn select_all(&self, needle: &str) -> Option<Selection> {
        Selection::new(self.filter(needle)).ok()
    }
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

fn load_description(path: &Path, format: DescriptorFormat) -> Result<String, LoadError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_descriptor(&contents, format)?)
}
