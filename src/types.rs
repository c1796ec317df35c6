/// Core data structures for batch results
///
/// This module defines the primary data structures used throughout batch-report
/// for representing finalized batches, their classification, and statistics.
use crate::error::ReportError;
use crate::report::{classify, compute_stats};
use chrono::{DateTime, Duration, Local};

/// One work item's outcome record: an open-ended, ordered mapping of string
/// keys to arbitrary JSON-shaped values. The crate never inspects item
/// contents except to display them.
pub type Item = serde_json::Map<String, serde_json::Value>;

/// Open mapping of caller-supplied batch context (configuration used for the
/// run, identifiers, anything). Same shape as [`Item`].
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Batch-level classification, derived solely from category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Every item succeeded (or the batch was empty).
    Success,
    /// Everything failed outright, nothing partial.
    Failed,
    /// Any mix involving partial items, or a mix of success and failure.
    Partial,
}

impl BatchStatus {
    /// Lower-case token used in the structured report.
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Success => "success",
            BatchStatus::Failed => "failed",
            BatchStatus::Partial => "partial",
        }
    }
}

/// Summary statistics for one batch.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BatchStats {
    pub total_count: usize,
    pub success_count: usize,
    pub failed_count: usize,
    pub partial_count: usize,
    /// Percentage of succeeded items in `[0, 100]`. Full precision; the text
    /// report rounds to one decimal. `0.0` for an empty batch.
    pub success_rate: f64,
}

/// Immutable snapshot of a finished batch, derived exactly once from a
/// [`BatchAccumulator`](crate::BatchAccumulator) at finalization (or built
/// directly from full lists via [`BatchResult::build`]).
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub name: String,
    pub status: BatchStatus,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub duration: Duration,
    pub stats: BatchStats,
    pub success_items: Vec<Item>,
    pub failed_items: Vec<Item>,
    pub partial_items: Vec<Item>,
    pub metadata: Metadata,
    pub error_messages: Vec<String>,
}

impl BatchResult {
    /// Build a result directly from full lists, bypassing the accumulator.
    ///
    /// Status and statistics are recomputed from the list lengths, so the
    /// `total == success + failed + partial` invariant always holds.
    ///
    /// # Errors
    /// `ReportError::InvalidTimeRange` if `end_time` precedes `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        name: impl Into<String>,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        success_items: Vec<Item>,
        failed_items: Vec<Item>,
        partial_items: Vec<Item>,
        metadata: Metadata,
        error_messages: Vec<String>,
    ) -> Result<Self, ReportError> {
        if end_time < start_time {
            return Err(ReportError::InvalidTimeRange { start: start_time, end: end_time });
        }

        let status = classify(success_items.len(), failed_items.len(), partial_items.len());
        let stats = compute_stats(success_items.len(), failed_items.len(), partial_items.len());

        Ok(BatchResult {
            name: name.into(),
            status,
            start_time,
            end_time,
            duration: end_time - start_time,
            stats,
            success_items,
            failed_items,
            partial_items,
            metadata,
            error_messages,
        })
    }

    /// Check if the whole batch succeeded.
    pub fn is_success(&self) -> bool {
        self.status == BatchStatus::Success
    }

    /// Check if any failed or partial reason was recorded.
    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(pairs: &[(&str, serde_json::Value)]) -> Item {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_status_token_serialization() {
        assert_eq!(serde_json::to_string(&BatchStatus::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&BatchStatus::Failed).unwrap(), "\"failed\"");
        assert_eq!(serde_json::to_string(&BatchStatus::Partial).unwrap(), "\"partial\"");

        let parsed: BatchStatus = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(parsed, BatchStatus::Partial);
    }

    #[test]
    fn test_build_recomputes_counts_from_lists() {
        let start = Local::now();
        let end = start + Duration::seconds(5);

        let result = BatchResult::build(
            "import",
            start,
            end,
            vec![item(&[("id", json!(1))]), item(&[("id", json!(2))])],
            vec![item(&[("id", json!(3))])],
            vec![],
            Metadata::new(),
            vec!["boom".to_string()],
        )
        .unwrap();

        assert_eq!(result.stats.total_count, 3);
        assert_eq!(result.stats.success_count, 2);
        assert_eq!(result.stats.failed_count, 1);
        assert_eq!(result.stats.partial_count, 0);
        assert_eq!(result.status, BatchStatus::Partial);
        assert_eq!(result.duration, Duration::seconds(5));
    }

    #[test]
    fn test_build_rejects_inverted_time_range() {
        let start = Local::now();
        let end = start - Duration::seconds(1);

        let err = BatchResult::build("import", start, end, vec![], vec![], vec![], Metadata::new(), vec![])
            .unwrap_err();

        assert!(matches!(err, ReportError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_build_zero_duration_is_valid() {
        let start = Local::now();
        let result =
            BatchResult::build("noop", start, start, vec![], vec![], vec![], Metadata::new(), vec![]).unwrap();

        assert_eq!(result.duration, Duration::zero());
        assert!(result.is_success());
        assert!(!result.has_errors());
    }
}
