//! Report file writing.
//!
//! The file-writing collaborator: consumes rendered report content, owns the
//! `{batch_name}_{timestamp}_report.<ext>` naming convention, creates the
//! output directory, and writes the files. The rendering core performs no I/O
//! of its own, so every error here is a plain `io::Error` propagated to the
//! caller unmodified.

use super::json::render_structured;
use super::text::{RenderConfig, render_text};
use crate::types::BatchResult;
use chrono::{DateTime, Local};
use log::info;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Timestamp component of report file names: sortable, second precision.
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Paths of the report files written for one batch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SavedReports {
    pub text: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

/// Build a report file name: `{batch_name}_{timestamp}_report.{extension}`.
pub fn report_file_name(batch_name: &str, end_time: DateTime<Local>, extension: &str) -> String {
    format!("{}_{}_report.{}", batch_name, end_time.format(FILE_STAMP_FORMAT), extension)
}

/// Render and write the text report into `output_dir`, creating the directory
/// if needed. Returns the written path.
pub fn save_text_report(output_dir: &Path, result: &BatchResult, config: &RenderConfig) -> std::io::Result<PathBuf> {
    let path = output_dir.join(report_file_name(&result.name, result.end_time, "txt"));
    fs::create_dir_all(output_dir)?;
    fs::write(&path, render_text(result, config))?;

    info!("text report saved: {}", path.display());
    Ok(path)
}

/// Render and write the structured report into `output_dir`, creating the
/// directory if needed. Returns the written path.
pub fn save_structured_report(output_dir: &Path, result: &BatchResult) -> std::io::Result<PathBuf> {
    let path = output_dir.join(report_file_name(&result.name, result.end_time, "json"));
    fs::create_dir_all(output_dir)?;

    let file = File::create(&path)?;
    serde_json::to_writer_pretty(file, &render_structured(result))?;

    info!("structured report saved: {}", path.display());
    Ok(path)
}
