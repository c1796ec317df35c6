/// Mutable collector for an in-progress batch
///
/// This module handles:
/// - Creating a batch context with a fixed start instant
/// - Recording success / failed / partial outcomes in processing order
/// - Snapshotting into an immutable `BatchResult` at finalization
use crate::error::ReportError;
use crate::types::{BatchResult, Item, Metadata};
use chrono::{DateTime, Local};
use log::debug;
use serde_json::Value;

/// Mutable, single-owner container collecting per-item outcomes while a batch
/// runs. Not internally synchronized; concurrent writers must serialize access
/// externally (one mutex per accumulator, or a single-writer queue).
///
/// Finalization consumes the accumulator, so recording after finalize and
/// finalizing twice are compile errors.
#[derive(Debug, Clone)]
pub struct BatchAccumulator {
    pub(crate) name: String,
    pub(crate) metadata: Metadata,
    pub(crate) start_time: DateTime<Local>,
    pub(crate) success_items: Vec<Item>,
    pub(crate) failed_items: Vec<Item>,
    pub(crate) partial_items: Vec<Item>,
    pub(crate) error_messages: Vec<String>,
}

impl BatchAccumulator {
    /// Create an empty accumulator. `start_time` is fixed to the creation
    /// instant.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_metadata(name, Metadata::new())
    }

    /// Create an empty accumulator carrying caller-supplied context that will
    /// be copied into the result and both reports.
    pub fn with_metadata(name: impl Into<String>, metadata: Metadata) -> Self {
        let name = name.into();
        debug!("starting batch '{}'", name);
        BatchAccumulator {
            name,
            metadata,
            start_time: Local::now(),
            success_items: Vec::new(),
            failed_items: Vec::new(),
            partial_items: Vec::new(),
            error_messages: Vec::new(),
        }
    }

    /// Record a successfully processed item. The item's shape is not
    /// validated.
    pub fn record_success(&mut self, item: Item) {
        self.success_items.push(item);
    }

    /// Record a failed item. The reason is stamped into the item under the
    /// `"error"` key (overwriting any existing value) and appended to the
    /// batch's error messages.
    pub fn record_failed(&mut self, mut item: Item, reason: impl Into<String>) {
        let reason = reason.into();
        debug!("batch '{}': item failed: {}", self.name, reason);
        item.insert("error".to_string(), Value::String(reason.clone()));
        self.failed_items.push(item);
        self.error_messages.push(reason);
    }

    /// Record a partially processed item. The reason is stamped into the item
    /// under the `"partial_reason"` key and appended to the batch's error
    /// messages.
    pub fn record_partial(&mut self, mut item: Item, reason: impl Into<String>) {
        let reason = reason.into();
        debug!("batch '{}': item partial: {}", self.name, reason);
        item.insert("partial_reason".to_string(), Value::String(reason.clone()));
        self.partial_items.push(item);
        self.error_messages.push(reason);
    }

    /// Batch identifier supplied at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instant this accumulator was created.
    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    pub fn success_count(&self) -> usize {
        self.success_items.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed_items.len()
    }

    pub fn partial_count(&self) -> usize {
        self.partial_items.len()
    }

    /// Items recorded so far, across all three categories.
    pub fn total_count(&self) -> usize {
        self.success_items.len() + self.failed_items.len() + self.partial_items.len()
    }

    /// Snapshot into an immutable [`BatchResult`], consuming the accumulator.
    ///
    /// This is the pure core of finalization: no rendering, no I/O. Use
    /// [`finalize`](crate::finalize) for the full orchestration.
    ///
    /// # Errors
    /// `ReportError::InvalidTimeRange` if `end_time` precedes the
    /// accumulator's start instant.
    pub fn into_result(self, end_time: DateTime<Local>) -> Result<BatchResult, ReportError> {
        BatchResult::build(
            self.name,
            self.start_time,
            end_time,
            self.success_items,
            self.failed_items,
            self.partial_items,
            self.metadata,
            self.error_messages,
        )
    }
}
