//! Shared reporting contract for batch-processing tasks.
//!
//! Unrelated jobs that process a batch of work items all need the same
//! closing move: collect what succeeded, what failed, and what only partly
//! worked, classify the run as a whole, and leave behind a readable record.
//! This crate is that contract, so each job doesn't invent its own ad-hoc
//! logging.
//!
//! The flow:
//!
//! 1. Create a [`BatchAccumulator`] and record outcomes as the batch runs.
//!    Items are opaque key-value records ([`Item`]); any shape goes.
//! 2. Call [`finalize`] (or [`finalize_at`]) with [`FinalizeOptions`]. The
//!    accumulator is consumed and snapshotted into an immutable
//!    [`BatchResult`] with a [`BatchStatus`] and [`BatchStats`].
//! 3. Per options, the text report and the structured JSON report are written
//!    via the export collaborator, and a short summary is printed.
//!
//! ```no_run
//! use batch_report::{BatchAccumulator, FinalizeOptions, Item, finalize};
//! use serde_json::json;
//!
//! let mut batch = BatchAccumulator::new("convert_audio");
//!
//! let mut item = Item::new();
//! item.insert("file".to_string(), json!("song1.flac"));
//! batch.record_success(item);
//!
//! let mut item = Item::new();
//! item.insert("file".to_string(), json!("song2.flac"));
//! batch.record_failed(item, "unsupported codec");
//!
//! let outcome = finalize(batch, &FinalizeOptions::default())?;
//! assert_eq!(outcome.result.stats.total_count, 2);
//! # Ok::<(), batch_report::ReportError>(())
//! ```
//!
//! The renderers ([`render_text`], [`render_structured`]) and the pure
//! classification/statistics functions ([`classify`], [`compute_stats`]) are
//! exported directly for callers that handle their own I/O.

mod accumulator;
mod console;
mod error;
mod finalize;
pub mod report;
mod types;

pub use accumulator::BatchAccumulator;
pub use console::print_summary;
pub use error::ReportError;
pub use finalize::{FinalizeOptions, FinalizeOutcome, finalize, finalize_at};
pub use report::{
    DEFAULT_DETAIL_LIMIT, RenderConfig, SavedReports, classify, compute_stats, format_duration, render_structured,
    render_text, report_file_name,
};
pub use types::{BatchResult, BatchStats, BatchStatus, Item, Metadata};
