//! Batch orchestrator.
//!
//! Resolves each selected template to image IDs through the catalog search
//! and drives the retry-gated installer over every ID, sequentially, in
//! selection order then search order. Failures are isolated per image and
//! per template: the orchestrator never aborts a batch because of one.

mod summary;

use std::collections::HashSet;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use vmforge_core::settings::{SettingsError, validate_settings};
use vmforge_core::{ImageId, InstallEvent, InstallSettings, Selection, SkipReason, Template};

use crate::deps::EngineDeps;
use crate::installer::RetryGatedInstaller;

pub use summary::{BatchSummary, TemplateReport, TemplateStatus};

/// Drives installation across a whole selection.
pub struct BatchOrchestrator {
    deps: EngineDeps,
    settings: InstallSettings,
}

impl BatchOrchestrator {
    /// Create an orchestrator. Settings are validated once here and stay
    /// constant for every run.
    pub fn new(deps: EngineDeps, settings: InstallSettings) -> Result<Self, SettingsError> {
        validate_settings(&settings)?;
        Ok(Self { deps, settings })
    }

    pub const fn settings(&self) -> &InstallSettings {
        &self.settings
    }

    /// Install every image of every template in `selection`.
    ///
    /// Returns once all templates are processed or the token is cancelled.
    /// Work already in flight (a fetch attempt) is never interrupted.
    pub async fn run(&self, selection: &Selection, cancel: &CancellationToken) -> BatchSummary {
        let installer = RetryGatedInstaller::new(&self.deps, &self.settings);
        let mut summary = BatchSummary::default();
        let mut seen: HashSet<ImageId> = HashSet::new();

        info!(templates = selection.len(), "Starting install run");
        self.deps.events.emit(&InstallEvent::RunStarted {
            templates: selection.len(),
        });

        for template in selection {
            if cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }

            let report = self
                .process_template(&installer, template, &mut seen, cancel)
                .await;
            summary.templates.push(report);
        }

        if cancel.is_cancelled() {
            summary.cancelled = true;
        }

        if summary.cancelled {
            warn!("Install run cancelled");
            self.deps.events.emit(&InstallEvent::RunCancelled);
        } else {
            self.deps.events.emit(&InstallEvent::RunCompleted {
                installed: summary.installed(),
                failed: summary.failed(),
                skipped: summary.skipped_templates(),
            });
        }
        info!(
            installed = summary.installed(),
            failed = summary.failed(),
            skipped = summary.skipped_templates(),
            "Install run finished"
        );

        summary
    }

    async fn process_template(
        &self,
        installer: &RetryGatedInstaller<'_>,
        template: &Template,
        seen: &mut HashSet<ImageId>,
        cancel: &CancellationToken,
    ) -> TemplateReport {
        self.deps.events.emit(&InstallEvent::TemplateStarted {
            template: template.name.clone(),
        });

        let images = match self.deps.catalog.search(&template.name).await {
            Ok(images) if images.is_empty() => {
                return self.skip(template, SkipReason::NoImages);
            }
            Ok(images) => images,
            Err(e) => {
                warn!(template = %template.name, error = %e, "Catalog search failed");
                return self.skip(
                    template,
                    SkipReason::SearchFailed {
                        message: e.to_string(),
                    },
                );
            }
        };

        self.deps.events.emit(&InstallEvent::ImagesResolved {
            template: template.name.clone(),
            count: images.len(),
        });

        let mut results = Vec::with_capacity(images.len());
        let mut duplicates = Vec::new();

        for image in images {
            if cancel.is_cancelled() {
                break;
            }

            if !seen.insert(image.clone()) {
                self.deps.events.emit(&InstallEvent::ImageSkipped {
                    image: image.clone(),
                    reason: SkipReason::Duplicate,
                });
                duplicates.push(image);
                continue;
            }

            results.push(installer.install(&image, cancel).await);
        }

        TemplateReport {
            template: template.clone(),
            status: TemplateStatus::Processed {
                results,
                duplicates,
            },
        }
    }

    fn skip(&self, template: &Template, reason: SkipReason) -> TemplateReport {
        self.deps.events.emit(&InstallEvent::TemplateSkipped {
            template: template.name.clone(),
            reason: reason.clone(),
        });
        TemplateReport {
            template: template.clone(),
            status: TemplateStatus::Skipped { reason },
        }
    }
}
