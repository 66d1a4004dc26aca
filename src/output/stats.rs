//! Statistics reporting.

use console::style;

use crate::download::BatchSummary;

/// Print the outcome of a batch.
pub fn print_batch_summary(summary: &BatchSummary) {
    println!();
    if summary.all_succeeded() {
        println!(
            "{}",
            style("All segments downloaded successfully!").green().bold()
        );
    } else {
        println!(
            "{}",
            style(format!(
                "Failed to download {} out of {} segments",
                summary.failed, summary.total
            ))
            .red()
            .bold()
        );
    }
    println!("  Downloaded: {}", style(summary.succeeded).green());
    println!("  Failed:     {}", style(summary.failed).red());
    if summary.cancelled > 0 {
        println!("  Cancelled:  {}", style(summary.cancelled).yellow());
    }
    println!("  Total:      {}", summary.total);
}
