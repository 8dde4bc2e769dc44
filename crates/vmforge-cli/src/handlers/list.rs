//! List command handler.
//!
//! Displays templates from the templates directory, optionally filtered
//! by description.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_templates;

pub fn execute(ctx: &CliContext, filter: Option<&str>, json: bool) -> Result<()> {
    let templates = ctx.templates().filter(filter.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    if templates.is_empty() {
        match filter {
            Some(f) if !f.is_empty() => println!("No templates match '{f}'."),
            _ => {
                println!(
                    "No templates found in {}.",
                    ctx.templates().dir().display()
                );
                println!("Add a descriptor such as 'debian-12.json' with a \"description\" field.");
            }
        }
        return Ok(());
    }

    println!("Found {} template(s):\n", templates.len());
    print_templates(&templates);
    Ok(())
}
