//! Console output helpers

use console::Style;

/// Print an informational status line
pub fn info(message: &str) {
    println!("{}", message);
}

/// Print a success line
pub fn success(message: &str) {
    println!("{}", Style::new().green().apply_to(message));
}

/// Print a warning to stderr
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message
    );
}

/// Print a dimmed debug line, only when verbose output is enabled
pub fn debug(verbose: bool, message: &str) {
    if verbose {
        println!("{}", Style::new().dim().apply_to(message));
    }
}
