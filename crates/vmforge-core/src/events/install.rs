//! Events emitted while a batch is being installed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::domain::{ImageId, LoadSample};

/// Why a template or image was skipped without a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The catalog search returned no image IDs.
    NoImages,
    /// The catalog search itself failed.
    SearchFailed { message: String },
    /// The image ID was already processed earlier in this run.
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImages => f.write_str("no images found"),
            Self::SearchFailed { message } => write!(f, "search failed: {message}"),
            Self::Duplicate => f.write_str("already processed in this run"),
        }
    }
}

/// A single observable transition in an install run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstallEvent {
    RunStarted {
        templates: usize,
    },
    TemplateStarted {
        template: String,
    },
    ImagesResolved {
        template: String,
        count: usize,
    },
    TemplateSkipped {
        template: String,
        reason: SkipReason,
    },
    ImageSkipped {
        image: ImageId,
        reason: SkipReason,
    },
    /// Load is at or above the threshold; the gate is sleeping.
    GateWaiting {
        image: ImageId,
        load: LoadSample,
        threshold: u8,
        cooldown: Duration,
    },
    GateCleared {
        image: ImageId,
        load: LoadSample,
    },
    /// `waited` is the cooldown already slept; `limit` is the configured bound.
    GateTimedOut {
        image: ImageId,
        waited: Duration,
        limit: Duration,
    },
    AttemptStarted {
        image: ImageId,
        attempt: u32,
        max_attempts: u32,
    },
    AttemptSucceeded {
        image: ImageId,
        attempt: u32,
    },
    AttemptFailed {
        image: ImageId,
        attempt: u32,
        error: String,
    },
    RetryScheduled {
        image: ImageId,
        next_attempt: u32,
        delay: Duration,
    },
    RetriesExhausted {
        image: ImageId,
        attempts: u32,
    },
    Pausing {
        image: ImageId,
        duration: Duration,
    },
    RunCancelled,
    RunCompleted {
        installed: usize,
        failed: usize,
        skipped: usize,
    },
}

impl InstallEvent {
    /// Short, stable label for the event kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RunStarted { .. } => "run_started",
            Self::TemplateStarted { .. } => "template_started",
            Self::ImagesResolved { .. } => "images_resolved",
            Self::TemplateSkipped { .. } => "template_skipped",
            Self::ImageSkipped { .. } => "image_skipped",
            Self::GateWaiting { .. } => "gate_waiting",
            Self::GateCleared { .. } => "gate_cleared",
            Self::GateTimedOut { .. } => "gate_timed_out",
            Self::AttemptStarted { .. } => "attempt_started",
            Self::AttemptSucceeded { .. } => "attempt_succeeded",
            Self::AttemptFailed { .. } => "attempt_failed",
            Self::RetryScheduled { .. } => "retry_scheduled",
            Self::RetriesExhausted { .. } => "retries_exhausted",
            Self::Pausing { .. } => "pausing",
            Self::RunCancelled => "run_cancelled",
            Self::RunCompleted { .. } => "run_completed",
        }
    }

    /// Whether the event reports a problem the user should notice.
    pub const fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::TemplateSkipped { .. }
                | Self::AttemptFailed { .. }
                | Self::RetriesExhausted { .. }
                | Self::GateTimedOut { .. }
                | Self::RunCancelled
        )
    }
}

impl fmt::Display for InstallEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunStarted { templates } => {
                write!(f, "starting install run for {templates} template(s)")
            }
            Self::TemplateStarted { template } => write!(f, "[{template}] searching catalog"),
            Self::ImagesResolved { template, count } => {
                write!(f, "[{template}] found {count} image(s)")
            }
            Self::TemplateSkipped { template, reason } => {
                write!(f, "[{template}] skipped: {reason}")
            }
            Self::ImageSkipped { image, reason } => write!(f, "{image}: skipped: {reason}"),
            Self::GateWaiting {
                image,
                load,
                threshold,
                cooldown,
            } => write!(
                f,
                "{image}: CPU at {load} (threshold {threshold}%), waiting {}s for load to drop",
                cooldown.as_secs()
            ),
            Self::GateCleared { image, load } => write!(f, "{image}: CPU at {load}, proceeding"),
            Self::GateTimedOut {
                image,
                waited,
                limit,
            } => write!(
                f,
                "{image}: load did not drop within the {}s gate timeout (waited {}s), giving up",
                limit.as_secs(),
                waited.as_secs()
            ),
            Self::AttemptStarted {
                image,
                attempt,
                max_attempts,
            } => write!(f, "{image}: attempt {attempt}/{max_attempts}"),
            Self::AttemptSucceeded { image, attempt } => {
                write!(f, "{image}: installed on attempt {attempt}")
            }
            Self::AttemptFailed {
                image,
                attempt,
                error,
            } => write!(f, "{image}: attempt {attempt} failed: {error}"),
            Self::RetryScheduled {
                image,
                next_attempt,
                delay,
            } => write!(
                f,
                "{image}: retrying in {}s (attempt {next_attempt})",
                delay.as_secs()
            ),
            Self::RetriesExhausted { image, attempts } => {
                write!(f, "{image}: max retries reached after {attempts} attempt(s)")
            }
            Self::Pausing { image, duration } => {
                write!(f, "{image}: pausing {}s before next install", duration.as_secs())
            }
            Self::RunCancelled => f.write_str("run cancelled"),
            Self::RunCompleted {
                installed,
                failed,
                skipped,
            } => write!(
                f,
                "run complete: {installed} installed, {failed} failed, {skipped} template(s) skipped"
            ),
        }
    }
}
