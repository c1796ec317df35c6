//! Structured (JSON-shaped) report rendering.
//!
//! The structured report is the lossless counterpart of the text report: it
//! carries every item untruncated and is meant for machine consumption. Field
//! names are an external contract.

use super::stats::{duration_seconds, format_duration};
use crate::types::BatchResult;
use serde_json::{Value, json};

/// Timestamp format used in `batch_info`: microsecond precision, sortable.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Render the structured report for a finalized batch.
///
/// Top-level keys: `batch_info`, `statistics`, `metadata`, `error_messages`,
/// `results`. Deterministic for the same result; never truncates.
pub fn render_structured(result: &BatchResult) -> Value {
    json!({
        "batch_info": {
            "name": result.name,
            "status": result.status.as_str(),
            "start_time": result.start_time.format(TIMESTAMP_FORMAT).to_string(),
            "end_time": result.end_time.format(TIMESTAMP_FORMAT).to_string(),
            "duration_seconds": duration_seconds(result.duration),
            "duration_formatted": format_duration(result.duration),
        },
        "statistics": result.stats,
        "metadata": result.metadata,
        "error_messages": result.error_messages,
        "results": {
            "success_items": result.success_items,
            "failed_items": result.failed_items,
            "partial_items": result.partial_items,
        },
    })
}
