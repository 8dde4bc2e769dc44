//! Sleep port.
//!
//! All waiting in the install engine goes through this trait so tests can
//! record sleeps instead of spending wall-clock time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Why the engine is sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepReason {
    /// Waiting for load to drop below the threshold.
    GateCooldown,
    /// Backing off after a failed fetch attempt.
    RetryBackoff,
    /// Pacing after an image finished, before the next one starts.
    InstallPause,
}

impl fmt::Display for SleepReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::GateCooldown => "gate cooldown",
            Self::RetryBackoff => "retry backoff",
            Self::InstallPause => "install pause",
        };
        f.write_str(label)
    }
}

/// Blocking wait primitive.
#[async_trait]
pub trait SleeperPort: Send + Sync {
    async fn sleep(&self, duration: Duration, reason: SleepReason);
}
