//! CPU load sampling backed by `sysinfo`.

use async_trait::async_trait;
use sysinfo::{CpuRefreshKind, MINIMUM_CPU_UPDATE_INTERVAL, RefreshKind, System};
use tokio::sync::Mutex;
use tracing::trace;

use vmforge_core::LoadSample;
use vmforge_core::ports::LoadMonitorPort;

/// Samples global CPU utilization.
///
/// `sysinfo` computes usage as a delta between two refreshes, so each
/// sample refreshes, waits `MINIMUM_CPU_UPDATE_INTERVAL`, and refreshes
/// again. Concurrent callers are serialized on the inner `System`.
pub struct SysinfoLoadMonitor {
    system: Mutex<System>,
}

impl SysinfoLoadMonitor {
    pub fn new() -> Self {
        let mut system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );
        system.refresh_cpu_usage();
        Self {
            system: Mutex::new(system),
        }
    }
}

impl Default for SysinfoLoadMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoadMonitorPort for SysinfoLoadMonitor {
    async fn sample(&self) -> LoadSample {
        let mut system = self.system.lock().await;
        system.refresh_cpu_usage();
        tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
        system.refresh_cpu_usage();

        let usage = system.global_cpu_usage();
        trace!(usage, "Refreshed global CPU usage");
        LoadSample::from_f32(usage)
    }
}
