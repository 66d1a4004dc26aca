//! Download module for segment downloading.
//!
//! This module provides:
//! - The admission gate bounding simultaneous downloads
//! - Bounded-concurrency batch downloading
//! - Per-segment results and batch summaries
//! - Fix mode planning
//! - Coordination of a full playlist run

pub mod batch;
pub mod coordinator;
pub mod fix;
pub mod gate;
pub mod result;

pub use batch::Downloader;
pub use coordinator::{Coordinator, RunOutcome};
pub use fix::{plan_fix, FixPlan};
pub use gate::AdmissionGate;
pub use result::{BatchResult, BatchSummary};
