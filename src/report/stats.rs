//! Status classification and statistics for batch results.
//!
//! Everything in this module is a pure function over category counts and
//! timestamps; item content is never inspected.

use crate::types::{BatchStats, BatchStatus};
use chrono::Duration;

/// Classify a batch from its category counts.
///
/// Truth table, in precedence order:
/// 1. no items at all -> `Success` (an empty batch is vacuously successful),
/// 2. no failed and no partial items -> `Success`,
/// 3. no succeeded and no partial items -> `Failed`,
/// 4. anything else -> `Partial`.
///
/// Total over all non-negative count triples.
pub fn classify(success: usize, failed: usize, partial: usize) -> BatchStatus {
    if failed == 0 && partial == 0 {
        // Also covers the empty batch: zero items classify as success.
        BatchStatus::Success
    } else if success == 0 && partial == 0 {
        BatchStatus::Failed
    } else {
        BatchStatus::Partial
    }
}

/// Calculate summary statistics from category counts.
///
/// `success_rate` is `(success / total) * 100` with full precision, or `0.0`
/// for an empty batch.
pub fn compute_stats(success: usize, failed: usize, partial: usize) -> BatchStats {
    let total = success + failed + partial;
    let success_rate = if total > 0 { success as f64 / total as f64 * 100.0 } else { 0.0 };

    BatchStats {
        total_count: total,
        success_count: success,
        failed_count: failed,
        partial_count: partial,
        success_rate,
    }
}

/// Format a duration as a compact human string using the largest applicable
/// units down to whole seconds: `"2h 5m 1s"`, `"3m 20s"`, `"45s"`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Duration in seconds as a float, microsecond precision, for the structured
/// report.
pub fn duration_seconds(duration: Duration) -> f64 {
    duration
        .num_microseconds()
        .map(|us| us as f64 / 1_000_000.0)
        .unwrap_or_else(|| duration.num_seconds() as f64)
}
