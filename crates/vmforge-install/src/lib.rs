//! Install engine for vmforge.
//!
//! - `installer` - the retry-gated installer for a single image ID
//! - `orchestrator` - the batch orchestrator driving the installer across a selection
//!
//! Everything here is generic over the ports in `vmforge_core::ports`; the
//! engine never spawns tasks and never runs two host-impacting steps at once.

// Re-export core types for convenience
pub use vmforge_core::{
    AttemptOutcome, AttemptResult, ImageId, InstallEvent, InstallSettings, Selection, SkipReason,
    Template,
};

mod deps;
mod installer;
mod orchestrator;

pub use deps::EngineDeps;
pub use installer::RetryGatedInstaller;
pub use orchestrator::{BatchOrchestrator, BatchSummary, TemplateReport, TemplateStatus};

// `mockall` is only used by unit tests inside `installer`
#[cfg(test)]
use mockall as _;
