//! Install event sink port.
//!
//! The engine reports every transition through this port. Implementations
//! write to a log file, the terminal, tracing, or several at once.

use std::sync::Arc;

use crate::events::InstallEvent;

/// Receives install events in the order they happen.
///
/// Emission is synchronous and must not fail the run: sinks swallow or log
/// their own I/O errors.
pub trait InstallEventSinkPort: Send + Sync {
    fn emit(&self, event: &InstallEvent);
}

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl NoopEventSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InstallEventSinkPort for NoopEventSink {
    fn emit(&self, _event: &InstallEvent) {
        // Intentionally do nothing
    }
}

/// Fans each event out to several sinks, in registration order.
#[derive(Clone, Default)]
pub struct CompositeEventSink {
    sinks: Vec<Arc<dyn InstallEventSinkPort>>,
}

impl CompositeEventSink {
    #[must_use]
    pub const fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn InstallEventSinkPort>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl InstallEventSinkPort for CompositeEventSink {
    fn emit(&self, event: &InstallEvent) {
        for sink in &self.sinks {
            sink.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CollectingSink {
        kinds: Mutex<Vec<&'static str>>,
    }

    impl InstallEventSinkPort for CollectingSink {
        fn emit(&self, event: &InstallEvent) {
            self.kinds.lock().unwrap().push(event.kind());
        }
    }

    #[test]
    fn composite_forwards_to_every_sink() {
        let first = Arc::new(CollectingSink::default());
        let second = Arc::new(CollectingSink::default());
        let composite = CompositeEventSink::new()
            .with_sink(first.clone())
            .with_sink(Arc::new(NoopEventSink::new()))
            .with_sink(second.clone());

        composite.emit(&InstallEvent::RunStarted { templates: 2 });
        composite.emit(&InstallEvent::RunCancelled);

        assert_eq!(composite.len(), 3);
        assert_eq!(*first.kinds.lock().unwrap(), ["run_started", "run_cancelled"]);
        assert_eq!(*second.kinds.lock().unwrap(), ["run_started", "run_cancelled"]);
    }
}
