//! OS-level adapters implementing the `vmforge-core` ports.
//!
//! - `SysinfoLoadMonitor` - host CPU sampling (`LoadMonitorPort`)
//! - `TokioSleeper` - wall-clock sleeping (`SleeperPort`)
//! - `ExternalImageTool` - subprocess search/fetch (`ImageCatalogPort`)
//! - `FileEventLog`, `TracingEventSink` - event sinks (`InstallEventSinkPort`)
//! - `probe` - startup precondition checks

#![deny(unsafe_code)]

pub mod events;
mod load;
pub mod probe;
mod sleeper;
pub mod tool;

pub use events::{FileEventLog, TracingEventSink};
pub use load::SysinfoLoadMonitor;
pub use probe::{CheckStatus, PreconditionCheck, check_preconditions, probe};
pub use sleeper::TokioSleeper;
pub use tool::{ExternalImageTool, ToolConfig, ToolError};
