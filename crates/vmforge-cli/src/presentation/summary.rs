//! End-of-run summary.

use std::path::Path;

use vmforge_core::AttemptOutcome;
use vmforge_install::{BatchSummary, TemplateStatus};

use super::print_separator;

/// Print a per-template breakdown followed by totals.
pub fn print_summary(summary: &BatchSummary, log_path: Option<&Path>) {
    println!();
    println!("Install summary");
    print_separator(60);

    for report in &summary.templates {
        match &report.status {
            TemplateStatus::Skipped { reason } => {
                println!("{:<24} skipped ({reason})", report.template.name);
            }
            TemplateStatus::Processed {
                results,
                duplicates,
            } => {
                println!("{}", report.template.name);
                for result in results {
                    println!(
                        "  {:<30} {} ({} attempt(s))",
                        result.image_id.as_str(),
                        outcome_label(result.outcome),
                        result.attempts
                    );
                }
                for id in duplicates {
                    println!("  {:<30} already processed this run", id.as_str());
                }
            }
        }
    }

    print_separator(60);
    println!(
        "Installed: {}  Failed: {}  Skipped templates: {}",
        summary.installed(),
        summary.failed(),
        summary.skipped_templates()
    );
    if summary.cancelled {
        println!("Run was cancelled before all templates were processed.");
    }
    if let Some(path) = log_path {
        println!("Log: {}", path.display());
    }
}

const fn outcome_label(outcome: AttemptOutcome) -> &'static str {
    match outcome {
        AttemptOutcome::Installed => "installed",
        AttemptOutcome::RetriesExhausted => "failed, max retries reached",
        AttemptOutcome::GateTimedOut => "failed, load stayed high",
        AttemptOutcome::Cancelled => "cancelled",
    }
}
