use std::collections::HashSet;

use vmforge_core::ImageId;

/// Extract image IDs from a tool listing.
///
/// The first whitespace-separated token of each line is the ID. Blank
/// lines and `#` comments are skipped. IDs not starting with `prefix`
/// are dropped, so a tool that already filters is unaffected. Order is
/// kept and repeats are removed.
pub fn parse_listing(stdout: &str, prefix: &str) -> Vec<ImageId> {
    let mut seen = HashSet::new();

    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .filter(|id| id.starts_with(prefix))
        .filter(|id| seen.insert(*id))
        .map(ImageId::from)
        .collect()
}
