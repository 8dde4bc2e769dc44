//! Install event vocabulary.
//!
//! Every state transition inside a run is described by an `InstallEvent`
//! and handed to an `InstallEventSinkPort`. Sinks render or persist them;
//! the core never reads events back.

mod install;

pub use install::{InstallEvent, SkipReason};
