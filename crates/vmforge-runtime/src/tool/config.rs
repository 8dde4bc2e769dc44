use std::path::PathBuf;

use vmforge_core::ImageId;

pub const DEFAULT_TOOL: &str = "virt-builder";
pub const DEFAULT_SEARCH_ARGS: &str = "--list";
pub const DEFAULT_FETCH_ARGS: &str = "{id} --output {dest}/{id}.img";

/// How to invoke the external image tool.
///
/// Argument templates may contain `{prefix}` (search), `{id}` and
/// `{dest}` (fetch). Placeholders are substituted per argument, so a
/// value containing spaces never splits into several arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub program: String,
    pub search_args: Vec<String>,
    pub fetch_args: Vec<String>,
    /// Directory images are written to.
    pub dest: PathBuf,
}

impl ToolConfig {
    pub fn new(program: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            search_args: split_args(DEFAULT_SEARCH_ARGS),
            fetch_args: split_args(DEFAULT_FETCH_ARGS),
            dest: dest.into(),
        }
    }

    #[must_use]
    pub fn with_search_args(mut self, args: Vec<String>) -> Self {
        self.search_args = args;
        self
    }

    #[must_use]
    pub fn with_fetch_args(mut self, args: Vec<String>) -> Self {
        self.fetch_args = args;
        self
    }

    pub(crate) fn search_command(&self, prefix: &str) -> Vec<String> {
        self.search_args
            .iter()
            .map(|arg| arg.replace("{prefix}", prefix))
            .collect()
    }

    pub(crate) fn fetch_command(&self, id: &ImageId) -> Vec<String> {
        let dest = self.dest.to_string_lossy();
        self.fetch_args
            .iter()
            .map(|arg| arg.replace("{id}", id.as_str()).replace("{dest}", &dest))
            .collect()
    }
}

/// Split a whitespace-separated argument string.
pub fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fetch_command_writes_into_dest() {
        let config = ToolConfig::new("virt-builder", "/var/lib/vmforge/images");
        assert_eq!(
            config.fetch_command(&ImageId::new("debian-12")),
            ["debian-12", "--output", "/var/lib/vmforge/images/debian-12.img"]
        );
        assert_eq!(config.search_command("debian"), ["--list"]);
    }

    #[test]
    fn prefix_placeholder_is_substituted() {
        let config = ToolConfig::new("tool", "/tmp").with_search_args(split_args("search --name {prefix}*"));
        assert_eq!(config.search_command("ubuntu"), ["search", "--name", "ubuntu*"]);
    }

    #[test]
    fn dest_with_spaces_stays_one_argument() {
        let config = ToolConfig::new("tool", "/home/me/VM Images");
        let args = config.fetch_command(&ImageId::new("arch"));
        assert_eq!(args.last().unwrap(), "/home/me/VM Images/arch.img");
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn split_args_ignores_extra_whitespace() {
        assert_eq!(split_args("  --list \t --format  short "), ["--list", "--format", "short"]);
        assert!(split_args("   ").is_empty());
    }
}
