//! Pure formatting functions for UI output.
//!
//! Results go to stdout undecorated so they can be captured by scripts;
//! everything else goes to stderr.

use crate::domain::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Print a result line to stdout.
pub fn display_result(rendered: &str) {
    println!("{}", rendered);
}

/// Describe a bump, e.g. `1.10.2 -> 1.10.3a1`.
pub fn format_bump(current: &Version, next: &Version) -> String {
    format!("{} -> {}", current, next)
}

/// Print a bump summary with status arrow to stderr.
pub fn display_bump(current: &Version, next: &Version) {
    eprintln!("\x1b[33m→\x1b[0m {}", format_bump(current, next));
}
