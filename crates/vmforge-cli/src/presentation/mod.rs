//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no selection or install logic.

pub mod console_sink;
pub mod summary;
pub mod tables;

pub use console_sink::ConsoleEventSink;
pub use summary::print_summary;
pub use tables::{print_separator, print_templates, truncate_string};
