//! Core domain for vmforge.
//!
//! Holds the types shared by every crate in the workspace (templates,
//! image identifiers, attempt results, load samples), the install settings
//! value, the install event vocabulary, and the port traits that adapters
//! implement. Nothing in here spawns processes or touches the network.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    AttemptOutcome, AttemptResult, EmptySelection, ImageId, LoadSample, Selection, Template,
};
pub use events::{InstallEvent, SkipReason};
pub use ports::{
    CatalogError, CompositeEventSink, CoreError, ImageCatalogPort, InstallEventSinkPort,
    LoadMonitorPort, NoopEventSink, PreconditionError, SleepReason, SleeperPort,
};
pub use settings::{
    DEFAULT_COOLDOWN_SECS, DEFAULT_CPU_THRESHOLD, DEFAULT_MAX_RETRIES, DEFAULT_PAUSE_SECS,
    InstallSettings, SettingsError, validate_settings,
};

// Re-export path utilities
pub use paths::{PathError, ResolvedPaths, data_root, ensure_directory};

#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
