//! Batch run summary.

use serde::Serialize;

use vmforge_core::{AttemptOutcome, AttemptResult, ImageId, SkipReason, Template};

/// What happened to one template in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TemplateStatus {
    /// Search returned image IDs and each was processed.
    Processed {
        results: Vec<AttemptResult>,
        /// IDs already handled earlier in the run.
        duplicates: Vec<ImageId>,
    },
    /// Nothing was fetched for this template.
    Skipped { reason: SkipReason },
}

/// Per-template entry in a `BatchSummary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateReport {
    pub template: Template,
    #[serde(flatten)]
    pub status: TemplateStatus,
}

impl TemplateReport {
    /// Attempt results for this template (empty when skipped).
    pub fn results(&self) -> &[AttemptResult] {
        match &self.status {
            TemplateStatus::Processed { results, .. } => results,
            TemplateStatus::Skipped { .. } => &[],
        }
    }

    pub const fn is_skipped(&self) -> bool {
        matches!(self.status, TemplateStatus::Skipped { .. })
    }
}

/// Terminal state of a batch run.
///
/// A partially completed batch is a valid terminal state; there is no rollback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Reports for every template reached, in selection order.
    pub templates: Vec<TemplateReport>,
    /// Whether the run stopped early because it was cancelled.
    pub cancelled: bool,
}

impl BatchSummary {
    /// All attempt results across templates, in processing order.
    pub fn results(&self) -> impl Iterator<Item = &AttemptResult> {
        self.templates.iter().flat_map(TemplateReport::results)
    }

    pub fn installed(&self) -> usize {
        self.results().filter(|r| r.success()).count()
    }

    /// Images that finished without installing (retries exhausted or gate timeout).
    pub fn failed(&self) -> usize {
        self.results()
            .filter(|r| {
                matches!(
                    r.outcome,
                    AttemptOutcome::RetriesExhausted | AttemptOutcome::GateTimedOut
                )
            })
            .count()
    }

    pub fn skipped_templates(&self) -> usize {
        self.templates.iter().filter(|t| t.is_skipped()).count()
    }

    pub fn is_fully_successful(&self) -> bool {
        !self.cancelled && self.results().all(AttemptResult::success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, outcome: AttemptOutcome) -> AttemptResult {
        AttemptResult::new(ImageId::new(id), outcome, 1)
    }

    #[test]
    fn counts_are_derived_from_reports() {
        let summary = BatchSummary {
            templates: vec![
                TemplateReport {
                    template: Template::new("plan9", "Plan 9 from Bell Labs"),
                    status: TemplateStatus::Skipped {
                        reason: SkipReason::NoImages,
                    },
                },
                TemplateReport {
                    template: Template::new("debian", "Debian cloud"),
                    status: TemplateStatus::Processed {
                        results: vec![
                            result("debian-11", AttemptOutcome::Installed),
                            result("debian-12", AttemptOutcome::RetriesExhausted),
                            result("debian-13", AttemptOutcome::GateTimedOut),
                        ],
                        duplicates: Vec::new(),
                    },
                },
            ],
            cancelled: false,
        };

        assert_eq!(summary.installed(), 1);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.skipped_templates(), 1);
        assert!(!summary.is_fully_successful());
    }

    #[test]
    fn empty_summary_is_successful() {
        assert!(BatchSummary::default().is_fully_successful());
    }
}
