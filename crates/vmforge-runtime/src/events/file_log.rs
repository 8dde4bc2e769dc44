//! Per-run append-only install log.
//!
//! Format: one line per event
//! ```text
//! 2026-03-01 14:02:11 INFO  [attempt_started] debian-12: attempt 1/4
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::warn;

use vmforge_core::InstallEvent;
use vmforge_core::ports::InstallEventSinkPort;

/// Writes every event to a log file with a local timestamp.
///
/// Write failures are reported through `tracing` and otherwise ignored;
/// losing a log line never stops an install run.
#[derive(Debug)]
pub struct FileEventLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileEventLog {
    /// Create a fresh log in `logs_dir` named `install-YYYYmmdd-HHMMSS.log`.
    pub fn create_in(logs_dir: &Path) -> io::Result<Self> {
        std::fs::create_dir_all(logs_dir)?;
        let name = format!("install-{}.log", Local::now().format("%Y%m%d-%H%M%S"));
        Self::open(logs_dir.join(name))
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(event: &InstallEvent) -> String {
        let level = if event.is_warning() { "WARN" } else { "INFO" };
        format!(
            "{} {level:<5} [{}] {event}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            event.kind()
        )
    }
}

impl InstallEventSinkPort for FileEventLog {
    fn emit(&self, event: &InstallEvent) {
        let line = Self::format_line(event);
        let Ok(mut file) = self.file.lock() else {
            warn!(path = %self.path.display(), "Install log lock poisoned");
            return;
        };
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|()| file.flush()) {
            warn!(path = %self.path.display(), error = %e, "Failed to write install log");
        }
    }
}
