//! Load monitor port.

use async_trait::async_trait;

use crate::domain::LoadSample;

/// Samples current host CPU utilization.
///
/// Each call takes a fresh measurement; implementations must not cache or
/// smooth values. Availability is checked once at startup, so sampling
/// itself is infallible.
#[async_trait]
pub trait LoadMonitorPort: Send + Sync {
    async fn sample(&self) -> LoadSample;
}
