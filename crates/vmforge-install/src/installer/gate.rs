//! Load gate: wait for CPU load to drop below the threshold.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use vmforge_core::ports::SleepReason;
use vmforge_core::{ImageId, InstallEvent, InstallSettings, LoadSample};

use super::pace;
use crate::deps::EngineDeps;

/// How a gate wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GateOutcome {
    /// Load is below the threshold; a fetch may start.
    Cleared(LoadSample),
    /// `gate_timeout` elapsed with load still high.
    TimedOut(Duration),
    Cancelled,
}

/// Sample load until it is below `settings.cpu_threshold`.
///
/// Sleeps `settings.cooldown` between samples. Without a `gate_timeout`
/// this waits indefinitely. Cancellation is checked before every sample
/// and raced against every sleep.
pub(crate) async fn wait_for_capacity(
    deps: &EngineDeps,
    settings: &InstallSettings,
    image: &ImageId,
    cancel: &CancellationToken,
) -> GateOutcome {
    let mut waited = Duration::ZERO;

    loop {
        if cancel.is_cancelled() {
            return GateOutcome::Cancelled;
        }

        let load = deps.load.sample().await;
        debug!(image = %image, load = load.percent(), threshold = settings.cpu_threshold, "Sampled CPU load");

        if !load.at_or_above(settings.cpu_threshold) {
            if !waited.is_zero() {
                deps.events.emit(&InstallEvent::GateCleared {
                    image: image.clone(),
                    load,
                });
            }
            return GateOutcome::Cleared(load);
        }

        if let Some(limit) = settings.gate_timeout {
            if waited + settings.cooldown > limit {
                deps.events.emit(&InstallEvent::GateTimedOut {
                    image: image.clone(),
                    waited,
                    limit,
                });
                return GateOutcome::TimedOut(waited);
            }
        }

        deps.events.emit(&InstallEvent::GateWaiting {
            image: image.clone(),
            load,
            threshold: settings.cpu_threshold,
            cooldown: settings.cooldown,
        });

        if !pace(deps, settings.cooldown, SleepReason::GateCooldown, cancel).await {
            return GateOutcome::Cancelled;
        }
        waited += settings.cooldown;
    }
}
