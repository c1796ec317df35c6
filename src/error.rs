//! Error types for batch finalization and report writing.

use chrono::{DateTime, Local};
use thiserror::Error;

/// Errors that can occur while building or emitting a batch report.
///
/// Rendering itself never fails: items are opaque and missing display keys
/// fall back to placeholders. Recording into an accumulator after
/// finalization is rejected at compile time, because finalization consumes
/// the accumulator by value.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The supplied end instant precedes the batch's start instant.
    #[error("invalid time range: end {end} precedes start {start}")]
    InvalidTimeRange {
        start: DateTime<Local>,
        end: DateTime<Local>,
    },

    /// A report file could not be written. The underlying `io::Error` is
    /// preserved unmodified as the source.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
