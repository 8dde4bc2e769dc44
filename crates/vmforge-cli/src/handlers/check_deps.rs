//! Check dependencies handler.
//!
//! Runs the same precondition checks `install` runs before showing the
//! menu and prints them as a table.

use anyhow::Result;
use vmforge_runtime::probe::{CheckStatus, PreconditionCheck, probe};

use crate::error::CliError;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check-deps command.
///
/// Returns an error (exit code 69) if any check fails.
pub fn execute(program: &str) -> Result<()> {
    println!("{BOLD}{BLUE}Checking vmforge preconditions...{RESET}\n");

    let checks = probe(program);

    println!("{BOLD}{:<20} {:<15} {:<50}{RESET}", "CHECK", "STATUS", "NOTES");
    println!("{}", "=".repeat(85));
    for check in &checks {
        print_check(check);
    }
    println!("{}", "=".repeat(85));

    let missing: Vec<&PreconditionCheck> = checks.iter().filter(|c| !c.is_present()).collect();
    if missing.is_empty() {
        println!(
            "{GREEN}✓ All preconditions satisfied{RESET} ({}/{})",
            checks.len(),
            checks.len()
        );
        return Ok(());
    }

    println!(
        "{RED}✗ {} precondition(s) failed.{RESET} ({}/{})",
        missing.len(),
        checks.len() - missing.len(),
        checks.len()
    );
    for check in &missing {
        if let Some(hint) = &check.install_hint {
            println!("  {BOLD}{}{RESET}: {hint}", check.name);
        }
    }

    let names: Vec<&str> = missing.iter().map(|c| c.name.as_str()).collect();
    Err(CliError::Precondition(format!("missing: {}", names.join(", "))).into())
}

fn print_check(check: &PreconditionCheck) {
    let (status, notes) = match &check.status {
        CheckStatus::Present { detail } => (format!("{GREEN}✓ ok{RESET}"), detail.as_str()),
        CheckStatus::Missing { reason } => (format!("{RED}✗ missing{RESET}"), reason.as_str()),
    };
    println!(
        "{:<20} {:<24} {} ({})",
        check.name, status, check.description, notes
    );
}
