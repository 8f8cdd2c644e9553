//! User interface module - terminal output for the binary.

pub mod formatter;

pub use formatter::{display_bump, display_error, display_result, format_bump};
