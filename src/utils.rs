//! Styled terminal messages for user-facing output.

use console::style;

/// Prints an error message with a consistent format for user-friendly
/// display. Goes to stderr.
///
/// # Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
/// - `suggestion`: The suggestion for resolving the error (skipped when
///   empty).
pub fn print_error(title: &str, details: &str, suggestion: &str) {
    eprintln!("{} {title}\n\n{details}", style("🚨 ERROR:").red().bold());

    if !suggestion.is_empty() {
        eprintln!("\n{suggestion}");
    }
}

/// Prints a success message with a consistent format for user-friendly
/// display.
///
/// # Arguments
/// - `title`: The title of the success message.
/// - `details`: The details of the success message.
pub fn print_success(title: &str, details: &str) {
    println!("{} {title}\n\n{details}", style("✅ SUCCESS:").green().bold());
}
