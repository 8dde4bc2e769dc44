use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use vmforge_core::ports::{SleepReason, SleeperPort};

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl TokioSleeper {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SleeperPort for TokioSleeper {
    async fn sleep(&self, duration: Duration, reason: SleepReason) {
        debug!(secs = duration.as_secs_f32(), %reason, "Sleeping");
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_the_requested_duration() {
        let start = tokio::time::Instant::now();
        TokioSleeper::new()
            .sleep(Duration::from_secs(10), SleepReason::GateCooldown)
            .await;
        assert!(start.elapsed() >= Duration::from_secs(10));
    }
}
