//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Resolved directories (via vmforge-core)
//! - Template catalog (via vmforge-catalog)
//! - Load monitor, sleeper, image tool, and event sinks (via vmforge-runtime)
//! - Batch orchestrator (via vmforge-install)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use vmforge_catalog::TemplateCatalog;
use vmforge_core::paths::DirectoryCreationStrategy;
use vmforge_core::ports::{CompositeEventSink, InstallEventSinkPort};
use vmforge_core::{CoreError, InstallSettings, ResolvedPaths, ensure_directory};
use vmforge_install::{BatchOrchestrator, EngineDeps};
use vmforge_runtime::{
    ExternalImageTool, FileEventLog, SysinfoLoadMonitor, TokioSleeper, TracingEventSink,
};

use crate::commands::ToolArgs;
use crate::error::CliError;
use crate::presentation::ConsoleEventSink;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `--templates-dir` override.
    pub templates_dir: Option<String>,
    /// `--images-dir` override.
    pub images_dir: Option<String>,
}

impl CliConfig {
    pub fn with_defaults() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_templates_dir(mut self, dir: Option<String>) -> Self {
        self.templates_dir = dir;
        self
    }

    #[must_use]
    pub fn with_images_dir(mut self, dir: Option<String>) -> Self {
        self.images_dir = dir;
        self
    }
}

/// Resolved directories and the scanned template catalog.
pub struct CliContext {
    pub paths: ResolvedPaths,
    pub templates: TemplateCatalog,
}

impl CliContext {
    pub const fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }

    pub const fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }
}

/// Resolve directories and scan the templates directory.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let paths = ResolvedPaths::resolve_with(
        config.templates_dir.as_deref(),
        config.images_dir.as_deref(),
    )
    .map_err(|e| CliError::from(CoreError::from(e)))?;

    let templates = TemplateCatalog::scan(&paths.templates_dir).map_err(CliError::from)?;
    debug!(
        templates_dir = %paths.templates_dir.display(),
        count = templates.len(),
        "Bootstrapped CLI context"
    );

    Ok(CliContext { paths, templates })
}

/// Everything one install run needs.
pub struct InstallSession {
    pub orchestrator: BatchOrchestrator,
    /// Where this run's event log is being written, if it could be created.
    pub log_path: Option<PathBuf>,
}

/// Wire the runtime adapters into a batch orchestrator.
///
/// Events go to the terminal, the tracing subscriber, and a fresh per-run
/// log file. A log file that cannot be created is reported and skipped.
pub fn build_install_session(
    ctx: &CliContext,
    tool: &ToolArgs,
    settings: InstallSettings,
) -> Result<InstallSession> {
    let images_dir = &ctx.paths.images_dir;
    ensure_directory(images_dir, DirectoryCreationStrategy::AutoCreate)
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    let mut events = CompositeEventSink::new()
        .with_sink(Arc::new(ConsoleEventSink::new()))
        .with_sink(Arc::new(TracingEventSink::new()));

    let log_path = match FileEventLog::create_in(&ctx.paths.logs_dir) {
        Ok(log) => {
            let path = log.path().to_path_buf();
            events = events.with_sink(Arc::new(log));
            Some(path)
        }
        Err(e) => {
            warn!(dir = %ctx.paths.logs_dir.display(), error = %e, "Install log unavailable");
            None
        }
    };
    let events: Arc<dyn InstallEventSinkPort> = Arc::new(events);

    let deps = EngineDeps::new(
        Arc::new(ExternalImageTool::new(tool.to_config(images_dir.clone()))),
        Arc::new(SysinfoLoadMonitor::new()),
        Arc::new(TokioSleeper::new()),
        events,
    );

    let orchestrator = BatchOrchestrator::new(deps, settings)
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    Ok(InstallSession {
        orchestrator,
        log_path,
    })
}
