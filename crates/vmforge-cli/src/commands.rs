//! Subcommands and their argument groups.

use std::time::Duration;

use clap::{Args, Subcommand};

use vmforge_core::{
    DEFAULT_COOLDOWN_SECS, DEFAULT_CPU_THRESHOLD, DEFAULT_MAX_RETRIES, DEFAULT_PAUSE_SECS,
    InstallSettings,
};
use vmforge_runtime::tool::{DEFAULT_FETCH_ARGS, DEFAULT_SEARCH_ARGS, DEFAULT_TOOL, ToolConfig, split_args};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List templates, optionally filtered by description
    List {
        /// Case-insensitive substring to match against descriptions
        #[arg(short, long)]
        filter: Option<String>,
        /// Print templates as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select templates and install their images
    Install(InstallArgs),

    /// Check that CPU sampling and the image tool are available
    CheckDeps {
        #[command(flatten)]
        tool: ToolArgs,
    },

    /// Show resolved paths for all vmforge directories
    Paths {
        /// Override the images directory
        #[arg(long = "images-dir")]
        images_dir: Option<String>,
    },
}

/// Arguments for `vmforge install`.
#[derive(Args)]
pub struct InstallArgs {
    /// Pre-apply a description filter (skips the filter prompt)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Install a single template by name, skipping the menu
    #[arg(short, long, conflicts_with = "all")]
    pub template: Option<String>,

    /// Install every template matching the filter, skipping the menu
    #[arg(long)]
    pub all: bool,

    /// Do not ask for confirmation before installing
    #[arg(short, long)]
    pub yes: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the images directory
    #[arg(long = "images-dir")]
    pub images_dir: Option<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub tool: ToolArgs,
}

/// Load gate, retry, and pacing parameters.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Hold fetches while CPU load is at or above this percentage
    #[arg(long, env = "VMFORGE_CPU_THRESHOLD", default_value_t = DEFAULT_CPU_THRESHOLD)]
    pub cpu_threshold: u8,

    /// Seconds between load samples and between retries
    #[arg(long = "cooldown", env = "VMFORGE_COOLDOWN_SECS", default_value_t = DEFAULT_COOLDOWN_SECS)]
    pub cooldown_secs: u64,

    /// Seconds to pause after every image
    #[arg(long = "pause", env = "VMFORGE_PAUSE_SECS", default_value_t = DEFAULT_PAUSE_SECS)]
    pub pause_secs: u64,

    /// Extra attempts after the first failed fetch
    #[arg(long, env = "VMFORGE_MAX_RETRIES", default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,

    /// Give up on an image after waiting this many seconds for load to drop
    #[arg(long = "gate-timeout", env = "VMFORGE_GATE_TIMEOUT_SECS")]
    pub gate_timeout_secs: Option<u64>,
}

impl SettingsArgs {
    /// Build (unvalidated) install settings.
    pub fn to_settings(&self) -> InstallSettings {
        InstallSettings::default()
            .with_cpu_threshold(self.cpu_threshold)
            .with_cooldown(Duration::from_secs(self.cooldown_secs))
            .with_pause_after(Duration::from_secs(self.pause_secs))
            .with_max_retries(self.max_retries)
            .with_gate_timeout(self.gate_timeout_secs.map(Duration::from_secs))
    }
}

/// External image tool invocation.
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// Program used to search for and fetch images
    #[arg(long = "tool", env = "VMFORGE_TOOL", default_value = DEFAULT_TOOL)]
    pub program: String,

    /// Arguments for listing images (`{prefix}` is substituted)
    #[arg(long = "tool-search-args", env = "VMFORGE_TOOL_SEARCH_ARGS", default_value = DEFAULT_SEARCH_ARGS, allow_hyphen_values = true)]
    pub search_args: String,

    /// Arguments for fetching one image (`{id}` and `{dest}` are substituted)
    #[arg(long = "tool-fetch-args", env = "VMFORGE_TOOL_FETCH_ARGS", default_value = DEFAULT_FETCH_ARGS, allow_hyphen_values = true)]
    pub fetch_args: String,
}

impl ToolArgs {
    /// Tool configuration writing images into `dest`.
    pub fn to_config(&self, dest: impl Into<std::path::PathBuf>) -> ToolConfig {
        ToolConfig::new(self.program.clone(), dest)
            .with_search_args(split_args(&self.search_args))
            .with_fetch_args(split_args(&self.fetch_args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_core_defaults() {
        let args = SettingsArgs {
            cpu_threshold: DEFAULT_CPU_THRESHOLD,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            pause_secs: DEFAULT_PAUSE_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            gate_timeout_secs: None,
        };
        assert_eq!(args.to_settings(), InstallSettings::default());
    }

    #[test]
    fn tool_args_are_whitespace_split() {
        let args = ToolArgs {
            program: "virt-builder".to_string(),
            search_args: "--list  --long".to_string(),
            fetch_args: "{id} -o {dest}/{id}.qcow2 --format qcow2".to_string(),
        };
        let config = args.to_config("/images");
        assert_eq!(config.search_args, ["--list", "--long"]);
        assert_eq!(config.fetch_args.len(), 5);
        assert_eq!(config.dest, std::path::PathBuf::from("/images"));
    }
}
