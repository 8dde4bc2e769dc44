//! Port bundle shared by the installer and orchestrator.

use std::sync::Arc;

use vmforge_core::ports::{ImageCatalogPort, InstallEventSinkPort, LoadMonitorPort, SleeperPort};

/// Dependencies for the install engine.
///
/// These are Arc references to ports so the composition root can share a
/// single adapter (e.g. the event sink) with other consumers.
#[derive(Clone)]
pub struct EngineDeps {
    /// Search and fetch against the external image tool.
    pub catalog: Arc<dyn ImageCatalogPort>,
    /// Fresh CPU load samples.
    pub load: Arc<dyn LoadMonitorPort>,
    /// Every wait goes through here.
    pub sleeper: Arc<dyn SleeperPort>,
    /// Receives every state transition.
    pub events: Arc<dyn InstallEventSinkPort>,
}

impl EngineDeps {
    pub fn new(
        catalog: Arc<dyn ImageCatalogPort>,
        load: Arc<dyn LoadMonitorPort>,
        sleeper: Arc<dyn SleeperPort>,
        events: Arc<dyn InstallEventSinkPort>,
    ) -> Self {
        Self {
            catalog,
            load,
            sleeper,
            events,
        }
    }
}
