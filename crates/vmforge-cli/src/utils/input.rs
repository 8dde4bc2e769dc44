//! User input utilities for interactive command-line prompts.
//!
//! The `*_from` variants take explicit reader and writer handles so the
//! menu can be driven from tests; the plain variants use stdin/stdout.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line.
///
/// Returns `None` at end of input.
pub fn read_prompt_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read user input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Interpret a yes/no answer. Empty input means no.
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Prompts for a yes/no confirmation, re-asking on anything else.
///
/// End of input counts as no.
pub fn prompt_confirmation_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool> {
    loop {
        let Some(answer) = read_prompt_from(input, output, &format!("{prompt} (y/N)"))? else {
            return Ok(false);
        };
        if let Some(confirmed) = parse_confirmation(&answer) {
            return Ok(confirmed);
        }
        writeln!(output, "Please enter 'y' for yes or 'n' for no.")?;
    }
}

/// Prompts the user for a yes/no confirmation on stdin.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_confirmation_from(&mut stdin.lock(), &mut stdout, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn confirmation_accepts_yes_variants() {
        assert_eq!(parse_confirmation("Y"), Some(true));
        assert_eq!(parse_confirmation("yes"), Some(true));
        assert_eq!(parse_confirmation(""), Some(false));
        assert_eq!(parse_confirmation("No"), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);
    }

    #[test]
    fn confirmation_reprompts_until_valid() {
        let mut input = Cursor::new("sure\nperhaps\ny\n");
        let mut output = Vec::new();

        assert!(prompt_confirmation_from(&mut input, &mut output, "Install?").unwrap());
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Install? (y/N): ").count(), 3);
        assert_eq!(printed.matches("Please enter 'y'").count(), 2);
    }

    #[test]
    fn end_of_input_declines() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(!prompt_confirmation_from(&mut input, &mut output, "Install?").unwrap());
    }

    #[test]
    fn read_prompt_trims_input() {
        let mut input = Cursor::new("  debian \n");
        let mut output = Vec::new();
        assert_eq!(
            read_prompt_from(&mut input, &mut output, "Filter").unwrap(),
            Some("debian".to_string())
        );
        assert_eq!(String::from_utf8(output).unwrap(), "Filter: ");
    }
}
