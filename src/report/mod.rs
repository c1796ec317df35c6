//! Report generation - classification, statistics, and rendering.
//!
//! This module handles:
//! - Classifying a batch from its category counts
//! - Calculating summary statistics and duration formatting
//! - Rendering the human-readable text report
//! - Rendering the structured (JSON) report
//! - Writing rendered reports to files
//!
//! # Module Organization
//!
//! - `stats` - Status classifier, statistics, duration formatting
//! - `text` - Fixed-layout text report renderer
//! - `json` - Structured report renderer (lossless, untruncated)
//! - `export` - File naming and report writing

mod export;
mod json;
mod stats;
mod text;

// Re-export stats functions
pub use stats::{classify, compute_stats, duration_seconds, format_duration};

// Re-export renderers and their config
pub use json::render_structured;
pub use text::{DEFAULT_DETAIL_LIMIT, RenderConfig, render_text};

// Re-export the file-writing collaborator
pub use export::{SavedReports, report_file_name, save_structured_report, save_text_report};
