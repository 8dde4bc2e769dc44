//! Install event sinks.

mod file_log;

use tracing::{info, warn};

use vmforge_core::InstallEvent;
use vmforge_core::ports::InstallEventSinkPort;

pub use file_log::FileEventLog;

/// Mirrors install events into the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub const fn new() -> Self {
        Self
    }
}

impl InstallEventSinkPort for TracingEventSink {
    fn emit(&self, event: &InstallEvent) {
        if event.is_warning() {
            warn!(target: "vmforge::install", kind = event.kind(), "{event}");
        } else {
            info!(target: "vmforge::install", kind = event.kind(), "{event}");
        }
    }
}
