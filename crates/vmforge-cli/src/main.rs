//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs the tracing subscriber, and
//! dispatches to handlers. Errors carrying a `CliError` set the process
//! exit code; anything else exits with 1.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use vmforge_cli::error::exit_code_for;
use vmforge_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    // Install events already reach the terminal through the console sink.
    let default = if verbose {
        "debug"
    } else {
        "warn,vmforge::install=off"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Paths { images_dir } => {
            handlers::paths::execute(cli.templates_dir.as_deref(), images_dir.as_deref())?;
        }
        Commands::CheckDeps { tool } => {
            handlers::check_deps::execute(&tool.program)?;
        }
        Commands::List { filter, json } => {
            let config = CliConfig::with_defaults().with_templates_dir(cli.templates_dir);
            let ctx = bootstrap(&config)?;
            handlers::list::execute(&ctx, filter.as_deref(), json)?;
        }
        Commands::Install(args) => {
            let config = CliConfig::with_defaults()
                .with_templates_dir(cli.templates_dir)
                .with_images_dir(args.images_dir.clone());
            let ctx = bootstrap(&config)?;
            handlers::install::execute(&ctx, &args).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads `env` defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = u8::try_from(exit_code_for(&e)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
