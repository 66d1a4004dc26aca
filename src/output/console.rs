//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the run configuration.
pub fn print_config_summary(url: &str, segments_dir: &str, concurrent: usize, fix: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Playlist:    {}", url);
    if fix {
        println!("  Fixing:      {}", segments_dir);
    } else {
        println!("  Segments:    {}", segments_dir);
    }
    println!("  Concurrency: {}", concurrent);
    println!();
}
