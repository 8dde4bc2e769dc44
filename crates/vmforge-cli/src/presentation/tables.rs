//! Table formatting utilities for CLI output.

use vmforge_core::Template;

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use vmforge_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Print templates as a name/description table.
pub fn print_templates(templates: &[Template]) {
    println!("{:<4} {:<28} Description", "#", "Name");
    print_separator(96);
    for (i, template) in templates.iter().enumerate() {
        println!(
            "{:<4} {:<28} {}",
            i + 1,
            truncate_string(&template.name, 27),
            truncate_string(&template.description, 63)
        );
    }
}
