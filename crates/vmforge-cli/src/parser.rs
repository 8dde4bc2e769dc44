//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Install VM images from template descriptors without overloading the host.
#[derive(Parser)]
#[command(name = "vmforge")]
#[command(about = "Install VM images from template descriptors, gated on host load")]
#[command(version)]
pub struct Cli {
    /// Override the templates directory for this invocation
    #[arg(long = "templates-dir", global = true)]
    pub templates_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Commands;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["vmforge", "--verbose", "--templates-dir", "/tmp/templates", "list"]);
        assert!(cli.verbose);
        assert_eq!(cli.templates_dir, Some("/tmp/templates".to_string()));
        assert!(matches!(cli.command, Some(Commands::List { .. })));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["vmforge", "paths", "--templates-dir", "/srv/t", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.templates_dir.as_deref(), Some("/srv/t"));
    }

    #[test]
    fn test_install_flags() {
        let cli = Cli::parse_from([
            "vmforge",
            "install",
            "--filter",
            "server",
            "--all",
            "--yes",
            "--cpu-threshold",
            "85",
            "--max-retries",
            "0",
            "--gate-timeout",
            "600",
        ]);
        let Some(Commands::Install(args)) = cli.command else {
            panic!("expected install command");
        };
        assert_eq!(args.filter.as_deref(), Some("server"));
        assert!(args.all);
        assert!(args.yes);

        let settings = args.settings.to_settings();
        assert_eq!(settings.cpu_threshold, 85);
        assert_eq!(settings.max_retries, 0);
        assert_eq!(settings.gate_timeout, Some(std::time::Duration::from_secs(600)));
    }

    #[test]
    fn test_template_conflicts_with_all() {
        let result = Cli::try_parse_from(["vmforge", "install", "--template", "debian", "--all"]);
        assert!(result.is_err());
    }
}
