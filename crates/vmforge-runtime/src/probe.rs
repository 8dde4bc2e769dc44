//! Startup precondition checks.
//!
//! Two things must hold before any menu is shown: CPU load can be sampled
//! on this host, and the external image tool resolves on `PATH`.

use std::path::PathBuf;

use sysinfo::{CpuRefreshKind, IS_SUPPORTED_SYSTEM, RefreshKind, System};
use tracing::debug;

use vmforge_core::PreconditionError;

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Present { detail: String },
    Missing { reason: String },
}

/// One named precondition with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionCheck {
    pub name: String,
    pub description: String,
    pub status: CheckStatus,
    pub install_hint: Option<String>,
}

impl PreconditionCheck {
    pub const fn is_present(&self) -> bool {
        matches!(self.status, CheckStatus::Present { .. })
    }
}

/// Run every check and report each one.
pub fn probe(program: &str) -> Vec<PreconditionCheck> {
    let sampler = match check_load_sampler() {
        Ok(cpus) => CheckStatus::Present {
            detail: format!("{cpus} CPU(s)"),
        },
        Err(e) => CheckStatus::Missing {
            reason: e.to_string(),
        },
    };

    let tool = match check_tool(program) {
        Ok(path) => CheckStatus::Present {
            detail: path.display().to_string(),
        },
        Err(e) => CheckStatus::Missing {
            reason: e.to_string(),
        },
    };

    vec![
        PreconditionCheck {
            name: "cpu-load".to_string(),
            description: "Host CPU utilization sampling".to_string(),
            status: sampler,
            install_hint: None,
        },
        PreconditionCheck {
            name: program.to_string(),
            description: "Image search and fetch tool".to_string(),
            status: tool,
            install_hint: (program == crate::tool::DEFAULT_TOOL)
                .then(|| "apt install guestfs-tools (or libguestfs-tools)".to_string()),
        },
    ]
}

/// Fail on the first missing precondition.
pub fn check_preconditions(program: &str) -> Result<(), PreconditionError> {
    let cpus = check_load_sampler()?;
    let path = check_tool(program)?;
    debug!(cpus, tool = %path.display(), "Preconditions satisfied");
    Ok(())
}

fn check_load_sampler() -> Result<usize, PreconditionError> {
    if !IS_SUPPORTED_SYSTEM {
        return Err(PreconditionError::LoadSamplerUnavailable(
            "unsupported operating system".to_string(),
        ));
    }

    let system = System::new_with_specifics(
        RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
    );
    match system.cpus().len() {
        0 => Err(PreconditionError::LoadSamplerUnavailable(
            "no CPUs visible".to_string(),
        )),
        n => Ok(n),
    }
}

fn check_tool(program: &str) -> Result<PathBuf, PreconditionError> {
    which::which(program).map_err(|e| PreconditionError::ToolMissing {
        program: program.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_reported() {
        let err = check_preconditions("vmforge-no-such-tool").unwrap_err();
        assert!(
            matches!(&err, PreconditionError::ToolMissing { program, .. } if program == "vmforge-no-such-tool")
                || matches!(err, PreconditionError::LoadSamplerUnavailable(_))
        );

        let checks = probe("vmforge-no-such-tool");
        assert_eq!(checks.len(), 2);
        assert!(!checks[1].is_present());
        assert!(checks[1].install_hint.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn shell_resolves_on_path() {
        assert!(check_tool("sh").is_ok());
    }

    #[test]
    fn default_tool_carries_an_install_hint() {
        let checks = probe(crate::tool::DEFAULT_TOOL);
        assert!(checks[1].install_hint.is_some());
    }
}
