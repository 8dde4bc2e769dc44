//! Live install progress on the terminal.

use console::{StyledObject, Term, style};
use tracing::debug;

use vmforge_core::InstallEvent;
use vmforge_core::ports::InstallEventSinkPort;

/// Prints each install event as one styled line on stdout.
pub struct ConsoleEventSink {
    term: Term,
}

impl ConsoleEventSink {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleEventSink {
    fn default() -> Self {
        Self::new()
    }
}

fn styled(event: &InstallEvent) -> StyledObject<String> {
    let text = event.to_string();
    match event {
        InstallEvent::RunStarted { .. } | InstallEvent::TemplateStarted { .. } => {
            style(text).bold()
        }
        InstallEvent::AttemptSucceeded { .. } | InstallEvent::GateCleared { .. } => {
            style(text).green()
        }
        InstallEvent::AttemptFailed { .. }
        | InstallEvent::RetriesExhausted { .. }
        | InstallEvent::GateTimedOut { .. } => style(text).red(),
        InstallEvent::GateWaiting { .. }
        | InstallEvent::TemplateSkipped { .. }
        | InstallEvent::ImageSkipped { .. }
        | InstallEvent::RunCancelled => style(text).yellow(),
        InstallEvent::RetryScheduled { .. } | InstallEvent::Pausing { .. } => style(text).dim(),
        _ => style(text),
    }
}

impl InstallEventSinkPort for ConsoleEventSink {
    fn emit(&self, event: &InstallEvent) {
        let indent = match event {
            InstallEvent::RunStarted { .. }
            | InstallEvent::RunCompleted { .. }
            | InstallEvent::RunCancelled
            | InstallEvent::TemplateStarted { .. } => "",
            _ => "  ",
        };
        if let Err(e) = self.term.write_line(&format!("{indent}{}", styled(event))) {
            debug!(error = %e, "Failed to write install event to terminal");
        }
    }
}
