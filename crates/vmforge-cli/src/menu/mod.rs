//! Interactive template selection.
//!
//! Shows the filtered templates as a numbered, paginated list and turns
//! the user's choice into a `Selection`: one template, or every template
//! matching the current filter.

mod pager;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use vmforge_catalog::TemplateCatalog;
use vmforge_core::Selection;

use crate::presentation::truncate_string;
use crate::utils::input::read_prompt_from;

pub use pager::{MenuCommand, PAGE_SIZE, Pager};

/// How the menu ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Selected(Selection),
    /// The user quit (or input ended) without choosing.
    Quit,
}

/// Run the menu on stdin/stdout.
pub fn select_interactive(catalog: &TemplateCatalog, filter: Option<&str>) -> Result<MenuOutcome> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    select(catalog, filter, &mut stdin.lock(), &mut stdout)
}

/// Run the menu over explicit input and output handles.
///
/// Without an initial `filter` the user is asked for one first.
pub fn select<R: BufRead, W: Write>(
    catalog: &TemplateCatalog,
    filter: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<MenuOutcome> {
    let mut filter = match filter {
        Some(f) => f.to_string(),
        None => match read_prompt_from(input, output, "Filter by description (blank for all)")? {
            Some(f) => f,
            None => return Ok(MenuOutcome::Quit),
        },
    };

    loop {
        let matches = catalog.filter(&filter);
        if matches.is_empty() {
            writeln!(output, "No templates match '{filter}'.")?;
            match read_prompt_from(input, output, "New filter (blank for all, q to quit)")? {
                None => return Ok(MenuOutcome::Quit),
                Some(f) if f.eq_ignore_ascii_case("q") => return Ok(MenuOutcome::Quit),
                Some(f) => filter = f,
            }
            continue;
        }

        let mut pager = Pager::new(matches, PAGE_SIZE);
        loop {
            render(output, &pager, &filter)?;
            let Some(line) = read_prompt_from(input, output, "Choice")? else {
                return Ok(MenuOutcome::Quit);
            };

            match MenuCommand::parse(&line) {
                MenuCommand::Pick(n) => match pager.pick(n) {
                    Some(template) => {
                        return Ok(MenuOutcome::Selected(Selection::single(template.clone())));
                    }
                    None => writeln!(output, "No template numbered {n}.")?,
                },
                MenuCommand::All => {
                    let selection = Selection::new(pager.into_items())?;
                    return Ok(MenuOutcome::Selected(selection));
                }
                MenuCommand::Next => {
                    if !pager.next_page() {
                        writeln!(output, "Already on the last page.")?;
                    }
                }
                MenuCommand::Previous => {
                    if !pager.previous_page() {
                        writeln!(output, "Already on the first page.")?;
                    }
                }
                MenuCommand::Filter => {
                    match read_prompt_from(input, output, "New filter (blank for all)")? {
                        Some(f) => filter = f,
                        None => return Ok(MenuOutcome::Quit),
                    }
                    break;
                }
                MenuCommand::Quit => return Ok(MenuOutcome::Quit),
                MenuCommand::Invalid(raw) => writeln!(output, "Unrecognized choice '{raw}'.")?,
            }
        }
    }
}

fn render<W: Write>(output: &mut W, pager: &Pager, filter: &str) -> io::Result<()> {
    writeln!(output)?;
    if filter.is_empty() {
        write!(output, "All templates")?;
    } else {
        write!(output, "Templates matching '{filter}'")?;
    }
    writeln!(
        output,
        " (page {}/{}, {} total):",
        pager.page() + 1,
        pager.page_count(),
        pager.len()
    )?;

    for (number, template) in pager.visible() {
        writeln!(
            output,
            "  {number:>3}. {:<24} {}",
            truncate_string(&template.name, 24),
            truncate_string(&template.description, 60)
        )?;
    }

    writeln!(
        output,
        "[1-{}] install one  [a] all {}  [n] next  [p] previous  [f] filter  [q] quit",
        pager.len(),
        pager.len()
    )
}
