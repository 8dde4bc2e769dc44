//! External image tool adapter.
//!
//! Search and fetch are delegated to a command-line tool (by default
//! `virt-builder`). The adapter only builds argument lists, runs the
//! process, and interprets its exit status and output.

mod config;
mod listing;

use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use vmforge_core::ImageId;
use vmforge_core::ports::{CatalogError, ImageCatalogPort};

pub use config::{DEFAULT_FETCH_ARGS, DEFAULT_SEARCH_ARGS, DEFAULT_TOOL, ToolConfig, split_args};
pub use listing::parse_listing;

/// Failure running the external tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Exited {
        program: String,
        status: String,
        stderr: String,
    },
}

/// `ImageCatalogPort` backed by a subprocess.
#[derive(Debug, Clone)]
pub struct ExternalImageTool {
    config: ToolConfig,
}

impl ExternalImageTool {
    pub const fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ToolConfig {
        &self.config
    }

    async fn run(&self, args: Vec<String>) -> Result<String, ToolError> {
        let program = &self.config.program;
        debug!(program = %program, args = ?args, "Running image tool");

        let output: Output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ToolError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::Exited {
                program: program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ImageCatalogPort for ExternalImageTool {
    async fn search(&self, prefix: &str) -> Result<Vec<ImageId>, CatalogError> {
        let stdout = self
            .run(self.config.search_command(prefix))
            .await
            .map_err(|e| CatalogError::SearchFailed {
                prefix: prefix.to_string(),
                reason: e.to_string(),
            })?;

        let ids = parse_listing(&stdout, prefix);
        debug!(prefix, count = ids.len(), "Parsed image listing");
        Ok(ids)
    }

    async fn fetch(&self, id: &ImageId) -> Result<(), CatalogError> {
        info!(image = %id, dest = %self.config.dest.display(), "Fetching image");
        self.run(self.config.fetch_command(id))
            .await
            .map(|_| ())
            .map_err(|e| CatalogError::FetchFailed {
                id: id.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn search_filters_listing_by_prefix() {
        let config = ToolConfig::new("sh", "/tmp").with_search_args(sh(
            "printf '# header\\ndebian-12  x86_64  Debian 12\\nfedora-40 x86_64\\ndebian-11 x86_64\\n'",
        ));
        let tool = ExternalImageTool::new(config);

        let ids = tool.search("debian").await.unwrap();
        assert_eq!(ids, vec![ImageId::new("debian-12"), ImageId::new("debian-11")]);
    }

    #[tokio::test]
    async fn fetch_substitutes_placeholders() {
        let dest = tempfile::tempdir().unwrap();
        let mut args = sh("touch \"$0\"");
        args.push("{dest}/{id}.img".to_string());
        let config = ToolConfig::new("sh", dest.path()).with_fetch_args(args);
        let tool = ExternalImageTool::new(config);

        tool.fetch(&ImageId::new("alpine-3.20")).await.unwrap();
        assert!(dest.path().join("alpine-3.20.img").exists());
    }

    #[tokio::test]
    async fn failing_fetch_carries_stderr() {
        let config = ToolConfig::new("sh", "/tmp")
            .with_fetch_args(sh("echo 'mirror unreachable' >&2; exit 3"));
        let tool = ExternalImageTool::new(config);

        let err = tool.fetch(&ImageId::new("centos-9")).await.unwrap_err();
        match err {
            CatalogError::FetchFailed { id, reason } => {
                assert_eq!(id.as_str(), "centos-9");
                assert!(reason.contains("mirror unreachable"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_a_search_failure() {
        let tool = ExternalImageTool::new(ToolConfig::new("vmforge-no-such-tool", "/tmp"));

        assert!(matches!(
            tool.search("debian").await,
            Err(CatalogError::SearchFailed { .. })
        ));
    }
}
