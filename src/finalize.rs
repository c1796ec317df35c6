/// Batch finalization
///
/// This module handles:
/// - Snapshotting an accumulator into an immutable `BatchResult`
/// - Rendering and writing the text / structured reports per options
/// - Printing the interactive console summary
use crate::accumulator::BatchAccumulator;
use crate::console;
use crate::error::ReportError;
use crate::report::{RenderConfig, SavedReports, save_structured_report, save_text_report};
use crate::types::BatchResult;
use chrono::{DateTime, Local};
use log::debug;
use std::path::PathBuf;

/// What `finalize` should emit, and where.
///
/// All hand-off targets are explicit configuration threaded through here;
/// there is no module-level default output directory.
#[derive(Debug, Clone)]
pub struct FinalizeOptions {
    /// Render and write the text report.
    pub emit_text: bool,
    /// Render and write the structured (JSON) report.
    pub emit_structured: bool,
    /// Print the short console summary.
    pub print_summary: bool,
    /// Directory the report files are written into (created if missing).
    pub output_dir: PathBuf,
    /// Text renderer tunables (detail truncation limit, detail toggle).
    pub render: RenderConfig,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        FinalizeOptions {
            emit_text: true,
            emit_structured: true,
            print_summary: true,
            output_dir: PathBuf::from("batch_reports"),
            render: RenderConfig::default(),
        }
    }
}

/// A finalized batch: the immutable result plus the report files written.
#[derive(Debug)]
pub struct FinalizeOutcome {
    pub result: BatchResult,
    pub saved: SavedReports,
}

/// Finalize a batch at the current instant.
///
/// Consumes the accumulator: the snapshot is terminal, and any further
/// recording (or a second finalize) is a compile error.
///
/// ```compile_fail
/// use batch_report::{BatchAccumulator, FinalizeOptions, finalize};
///
/// let mut batch = BatchAccumulator::new("one_shot");
/// let _ = finalize(batch, &FinalizeOptions::default());
/// batch.record_success(Default::default()); // error: batch was moved
/// ```
///
/// # Errors
/// `ReportError::Io` if a requested report file cannot be written; the
/// underlying `io::Error` is preserved as the source.
pub fn finalize(batch: BatchAccumulator, options: &FinalizeOptions) -> Result<FinalizeOutcome, ReportError> {
    finalize_at(batch, Local::now(), options)
}

/// Finalize a batch at an explicit end instant.
///
/// For callers with their own clock, and for deterministic tests.
///
/// # Errors
/// `ReportError::InvalidTimeRange` if `end_time` precedes the batch's start;
/// `ReportError::Io` as for [`finalize`].
pub fn finalize_at(
    batch: BatchAccumulator,
    end_time: DateTime<Local>,
    options: &FinalizeOptions,
) -> Result<FinalizeOutcome, ReportError> {
    debug!("finalizing batch '{}' with {} items", batch.name(), batch.total_count());

    let result = batch.into_result(end_time)?;

    let mut saved = SavedReports::default();
    if options.emit_text {
        saved.text = Some(save_text_report(&options.output_dir, &result, &options.render)?);
    }
    if options.emit_structured {
        saved.json = Some(save_structured_report(&options.output_dir, &result)?);
    }

    if options.print_summary {
        console::print_summary(&result);
    }

    Ok(FinalizeOutcome { result, saved })
}

#[cfg(test)]
#[path = "finalize_test.rs"]
mod finalize_test;
