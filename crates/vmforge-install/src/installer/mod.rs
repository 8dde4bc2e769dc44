//! Retry-gated installer for a single image.
//!
//! For one image ID the installer:
//! 1. Waits at the load gate until CPU load is below the threshold
//! 2. Invokes the catalog fetch
//! 3. On failure, backs off for `cooldown` and goes back to the gate,
//!    up to `max_retries` extra attempts
//! 4. Always pauses for `pause_after` once the image is finished
//!
//! Attempts for one image are strictly sequential. An attempt that has
//! started always runs to completion, even if the run is cancelled meanwhile.

mod gate;

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use vmforge_core::ports::SleepReason;
use vmforge_core::{AttemptOutcome, AttemptResult, ImageId, InstallEvent, InstallSettings};

use crate::deps::EngineDeps;
use gate::{GateOutcome, wait_for_capacity};

/// Installs one image at a time, gated on host load.
///
/// Borrows the engine dependencies and the run's settings; the orchestrator
/// builds one per run.
pub struct RetryGatedInstaller<'a> {
    deps: &'a EngineDeps,
    settings: &'a InstallSettings,
}

impl<'a> RetryGatedInstaller<'a> {
    pub const fn new(deps: &'a EngineDeps, settings: &'a InstallSettings) -> Self {
        Self { deps, settings }
    }

    /// Process one image ID to a final outcome.
    ///
    /// Never returns an error: retry exhaustion and gate timeouts are
    /// reported in the `AttemptResult` so the caller can move on.
    pub async fn install(&self, image: &ImageId, cancel: &CancellationToken) -> AttemptResult {
        let max_attempts = self.settings.max_attempts();
        let mut attempts: u32 = 0;

        let outcome = loop {
            match wait_for_capacity(self.deps, self.settings, image, cancel).await {
                GateOutcome::Cleared(load) => {
                    debug!(image = %image, load = load.percent(), "Load gate cleared");
                }
                GateOutcome::TimedOut(waited) => {
                    debug!(image = %image, waited_secs = waited.as_secs(), "Load gate timed out");
                    break AttemptOutcome::GateTimedOut;
                }
                GateOutcome::Cancelled => {
                    return AttemptResult::new(image.clone(), AttemptOutcome::Cancelled, attempts);
                }
            }

            attempts += 1;
            self.deps.events.emit(&InstallEvent::AttemptStarted {
                image: image.clone(),
                attempt: attempts,
                max_attempts,
            });

            match self.deps.catalog.fetch(image).await {
                Ok(()) => {
                    self.deps.events.emit(&InstallEvent::AttemptSucceeded {
                        image: image.clone(),
                        attempt: attempts,
                    });
                    break AttemptOutcome::Installed;
                }
                Err(e) => {
                    warn!(image = %image, attempt = attempts, error = %e, "Fetch attempt failed");
                    self.deps.events.emit(&InstallEvent::AttemptFailed {
                        image: image.clone(),
                        attempt: attempts,
                        error: e.to_string(),
                    });
                }
            }

            if attempts >= max_attempts {
                self.deps.events.emit(&InstallEvent::RetriesExhausted {
                    image: image.clone(),
                    attempts,
                });
                break AttemptOutcome::RetriesExhausted;
            }

            self.deps.events.emit(&InstallEvent::RetryScheduled {
                image: image.clone(),
                next_attempt: attempts + 1,
                delay: self.settings.cooldown,
            });
            if !pace(self.deps, self.settings.cooldown, SleepReason::RetryBackoff, cancel).await {
                return AttemptResult::new(image.clone(), AttemptOutcome::Cancelled, attempts);
            }
        };

        // Pace regardless of outcome so back-to-back installs cannot saturate the host.
        self.deps.events.emit(&InstallEvent::Pausing {
            image: image.clone(),
            duration: self.settings.pause_after,
        });
        if !pace(self.deps, self.settings.pause_after, SleepReason::InstallPause, cancel).await {
            debug!(image = %image, "Cancelled during install pause");
        }

        AttemptResult::new(image.clone(), outcome, attempts)
    }
}

/// Sleep through the sleeper port unless cancelled first.
///
/// Returns `false` if the token fired before the sleep completed.
pub(crate) async fn pace(
    deps: &EngineDeps,
    duration: Duration,
    reason: SleepReason,
    cancel: &CancellationToken,
) -> bool {
    tokio::select! {
        biased;
        () = cancel.cancelled() => false,
        () = deps.sleeper.sleep(duration, reason) => true,
    }
}
