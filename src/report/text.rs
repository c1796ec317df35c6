//! Human-readable text report rendering.
//!
//! Produces a fixed-layout report from a finalized result: header,
//! statistics, metadata, error messages, then one detail block per non-empty
//! category. Blocks with zero items are omitted entirely, never rendered as
//! empty headers. Detail blocks are truncated; the structured report
//! (`render_structured`) is the lossless counterpart.

use super::stats::format_duration;
use crate::types::{BatchResult, Item};
use serde_json::Value;

/// Default number of item lines per detail block before truncation.
pub const DEFAULT_DETAIL_LIMIT: usize = 10;

/// Keys probed, in order, for an item's display name.
const DISPLAY_KEYS: [&str; 5] = ["title", "name", "file", "id", "message"];

/// Tunables for the text renderer.
///
/// The truncation threshold is deliberately configuration, not a report
/// contract; callers with long batches can raise it or skip details entirely.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum item lines per detail block; a trailing summary line counts
    /// the omitted remainder.
    pub detail_limit: usize,
    /// Render the per-category detail blocks at all.
    pub include_details: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { detail_limit: DEFAULT_DETAIL_LIMIT, include_details: true }
    }
}

/// Render the full text report for a finalized batch.
///
/// The layout is deterministic: the same result and config always produce the
/// same string.
pub fn render_text(result: &BatchResult, config: &RenderConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push(format!("BATCH REPORT: {}", result.name.to_uppercase()));
    lines.push("=".repeat(60));
    lines.push(format!("Generated: {}", result.end_time.format("%Y-%m-%d %H:%M:%S")));
    lines.push(format!("Status: {}", result.status.as_str().to_uppercase()));
    lines.push(format!("Duration: {}", format_duration(result.duration)));
    lines.push(format!("Started: {}", result.start_time.format("%H:%M:%S")));
    lines.push(format!("Finished: {}", result.end_time.format("%H:%M:%S")));

    // Statistics
    lines.push(String::new());
    lines.push("STATISTICS:".to_string());
    lines.push("-".repeat(20));
    lines.push(format!("Total items: {}", result.stats.total_count));
    lines.push(format!("Succeeded: {}", result.stats.success_count));
    lines.push(format!("Failed: {}", result.stats.failed_count));
    lines.push(format!("Partial: {}", result.stats.partial_count));
    if result.stats.total_count > 0 {
        lines.push(format!("Success rate: {:.1}%", result.stats.success_rate));
    }

    // Metadata
    if !result.metadata.is_empty() {
        lines.push(String::new());
        lines.push("METADATA:".to_string());
        lines.push("-".repeat(20));
        for (key, value) in result.metadata.iter() {
            lines.push(format!("{}: {}", title_case(key), value_display(value)));
        }
    }

    // Error messages
    if !result.error_messages.is_empty() {
        lines.push(String::new());
        lines.push("ERRORS:".to_string());
        lines.push("-".repeat(20));
        for message in &result.error_messages {
            lines.push(format!("- {}", message));
        }
    }

    // Per-category details
    if config.include_details {
        push_category_details(&mut lines, "SUCCESS", &result.success_items, None, config.detail_limit);
        push_category_details(&mut lines, "FAILED", &result.failed_items, Some("error"), config.detail_limit);
        push_category_details(
            &mut lines,
            "PARTIAL",
            &result.partial_items,
            Some("partial_reason"),
            config.detail_limit,
        );
    }

    lines.join("\n")
}

/// Append one category's detail block. Empty categories produce nothing.
fn push_category_details(
    lines: &mut Vec<String>,
    category: &str,
    items: &[Item],
    reason_key: Option<&str>,
    limit: usize,
) {
    if items.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(format!("{} DETAILS ({} items):", category, items.len()));
    lines.push("-".repeat(40));

    for (index, item) in items.iter().take(limit).enumerate() {
        let display = item_display_text(item);
        let reason = reason_key.and_then(|key| item.get(key)).map(value_display);
        match reason {
            Some(reason) => lines.push(format!("{}. {}: {}", index + 1, display, reason)),
            None => lines.push(format!("{}. {}", index + 1, display)),
        }
    }

    if items.len() > limit {
        lines.push(format!("... and {} more items", items.len() - limit));
    }
}

/// Extract a display name from an opaque item.
///
/// Probes the common display keys in order, falls back to the item's first
/// entry, and finally to `"unknown"` for an empty item. Never fails.
pub(crate) fn item_display_text(item: &Item) -> String {
    for key in DISPLAY_KEYS {
        if let Some(value) = item.get(key) {
            return value_display(value);
        }
    }

    if let Some((key, value)) = item.iter().next() {
        return format!("{}: {}", key, value_display(value));
    }

    "unknown".to_string()
}

/// Render a value as-is: bare text for strings, compact JSON otherwise.
fn value_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Human-friendly capitalization for metadata keys: underscores become spaces
/// and each word is capitalized ("input_dir" -> "Input Dir").
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
