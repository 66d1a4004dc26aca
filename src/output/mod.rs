//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Segment progress bar
//! - Batch summary reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{print_config_summary, print_error, print_info, print_success, print_warning};
pub use progress::create_segment_bar;
pub use stats::print_batch_summary;
