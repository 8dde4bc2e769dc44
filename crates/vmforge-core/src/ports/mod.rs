//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the install engine expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `tokio::process` or `sysinfo` types in any signature
//! - Every wait goes through `SleeperPort`
//! - Every observable transition goes through `InstallEventSinkPort`

pub mod catalog;
pub mod event_sink;
pub mod load_monitor;
pub mod sleeper;

use thiserror::Error;

pub use catalog::{CatalogError, ImageCatalogPort};
pub use event_sink::{CompositeEventSink, InstallEventSinkPort, NoopEventSink};
pub use load_monitor::LoadMonitorPort;
pub use sleeper::{SleepReason, SleeperPort};

use crate::paths::PathError;
use crate::settings::SettingsError;

/// A startup check failed; nothing may be installed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreconditionError {
    /// CPU load cannot be sampled on this host.
    #[error("CPU load sampling is unavailable: {0}")]
    LoadSamplerUnavailable(String),

    /// The external image tool is not installed or not on PATH.
    #[error("Required tool '{program}' was not found: {reason}")]
    ToolMissing { program: String, reason: String },
}

/// Aggregated error for core operations surfaced to adapters.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Path(#[from] PathError),
}
