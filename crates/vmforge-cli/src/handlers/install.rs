//! Install command handler.
//!
//! Flow: precondition checks, settings validation, template selection
//! (flag or interactive menu), confirmation, then one orchestrator run.
//! Ctrl+C cancels the run token; the step in progress finishes first.

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use vmforge_catalog::TemplateCatalog;
use vmforge_core::{CoreError, Selection, validate_settings};
use vmforge_runtime::check_preconditions;

use crate::bootstrap::{CliContext, build_install_session};
use crate::commands::InstallArgs;
use crate::error::CliError;
use crate::menu::{MenuOutcome, select_interactive};
use crate::presentation::print_summary;
use crate::utils::input::prompt_confirmation;

pub async fn execute(ctx: &CliContext, args: &InstallArgs) -> Result<()> {
    ensure_preconditions(&args.tool.program)?;

    let settings = args.settings.to_settings();
    validate_settings(&settings).map_err(|e| CliError::from(CoreError::from(e)))?;

    let selection = match resolve_selection(ctx.templates(), args)? {
        Some(selection) => selection,
        None => match select_interactive(ctx.templates(), args.filter.as_deref())? {
            MenuOutcome::Selected(selection) => selection,
            MenuOutcome::Quit => {
                println!("No templates selected.");
                return Ok(());
            }
        },
    };

    let names: Vec<&str> = selection.templates().iter().map(|t| t.name.as_str()).collect();
    println!("Selected {} template(s): {}", selection.len(), names.join(", "));

    if !args.yes && !prompt_confirmation(&format!("Install images for {} template(s)?", selection.len()))? {
        println!("Aborted.");
        return Ok(());
    }

    let session = build_install_session(ctx, &args.tool, settings)?;
    let cancel = CancellationToken::new();
    let watcher = cancel_on_ctrl_c(cancel.clone());

    let summary = session.orchestrator.run(&selection, &cancel).await;
    watcher.abort();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, session.log_path.as_deref());
    }
    Ok(())
}

/// Run the startup checks, logging a failure before it is returned.
fn ensure_preconditions(program: &str) -> Result<(), CliError> {
    check_preconditions(program).map_err(|e| {
        error!(tool = program, error = %e, "Precondition check failed, nothing will be installed");
        CliError::from(CoreError::from(e))
    })
}

/// Selection made by flags alone, or `None` when the menu should run.
///
/// `--template` ignores the filter. `--all` takes every template matching
/// it. Either way an empty result is an error.
fn resolve_selection(catalog: &TemplateCatalog, args: &InstallArgs) -> Result<Option<Selection>> {
    if let Some(name) = &args.template {
        let template = catalog
            .find(name)
            .ok_or_else(|| CliError::NothingToInstall(format!("no template named '{name}'")))?;
        return Ok(Some(Selection::single(template.clone())));
    }

    let filter = args.filter.as_deref().unwrap_or("");
    if args.all {
        let selection = catalog.select_all(filter).ok_or_else(|| {
            CliError::NothingToInstall(format!("no templates match '{filter}'"))
        })?;
        return Ok(Some(selection));
    }

    if catalog.is_empty() {
        return Err(CliError::NothingToInstall(format!(
            "no templates in {}",
            catalog.dir().display()
        ))
        .into());
    }

    Ok(None)
}

fn cancel_on_ctrl_c(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current step");
            eprintln!("\nInterrupted: finishing the current step, then stopping.");
            cancel.cancel();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io;
    use std::sync::{Arc, Mutex};
    use vmforge_core::Template;

    use crate::commands::Commands;
    use crate::error::exit_code_for;
    use crate::parser::Cli;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::from_templates(
            "/templates",
            vec![
                Template::new("ubuntu", "Ubuntu server"),
                Template::new("debian", "Debian server"),
                Template::new("mint", "Mint desktop"),
            ],
        )
    }

    fn install_args(extra: &[&str]) -> InstallArgs {
        let argv = ["vmforge", "install"].iter().chain(extra).copied();
        match Cli::parse_from(argv).command {
            Some(Commands::Install(args)) => args,
            _ => panic!("expected install command"),
        }
    }

    #[test]
    fn template_flag_selects_by_name() {
        let selection = resolve_selection(&catalog(), &install_args(&["--template", "mint"]))
            .unwrap()
            .unwrap();
        assert_eq!(selection.templates()[0].name, "mint");
    }

    #[test]
    fn unknown_template_is_nothing_to_install() {
        let err = resolve_selection(&catalog(), &install_args(&["--template", "arch"])).unwrap_err();
        assert_eq!(exit_code_for(&err), 65);
    }

    #[test]
    fn all_flag_applies_the_filter() {
        let selection = resolve_selection(&catalog(), &install_args(&["--all", "--filter", "server"]))
            .unwrap()
            .unwrap();
        let names: Vec<_> = selection.templates().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["debian", "ubuntu"]);
    }

    #[test]
    fn all_with_no_matches_is_an_error() {
        let err = resolve_selection(&catalog(), &install_args(&["--all", "--filter", "bsd"])).unwrap_err();
        assert_eq!(exit_code_for(&err), 65);
    }

    #[test]
    fn no_flags_defers_to_the_menu() {
        assert!(resolve_selection(&catalog(), &install_args(&[])).unwrap().is_none());
    }

    #[test]
    fn empty_catalog_without_flags_is_an_error() {
        let empty = TemplateCatalog::from_templates("/templates", Vec::new());
        let err = resolve_selection(&empty, &install_args(&[])).unwrap_err();
        assert_eq!(exit_code_for(&err), 65);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_tool_is_logged_and_unavailable() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let err = tracing::subscriber::with_default(subscriber, || {
            ensure_preconditions("vmforge-no-such-tool-on-path").unwrap_err()
        });

        assert_eq!(err.exit_code(), 69);
        let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("ERROR"));
        assert!(logged.contains("Precondition check failed"));
        assert!(logged.contains("vmforge-no-such-tool-on-path"));
    }
}
