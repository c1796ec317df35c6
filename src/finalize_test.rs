/// Tests for the finalize module
#[cfg(test)]
mod tests {
    use crate::accumulator::BatchAccumulator;
    use crate::error::ReportError;
    use crate::finalize::{FinalizeOptions, finalize_at};
    use crate::report::RenderConfig;
    use crate::types::{BatchStatus, Item};
    use chrono::Duration;
    use serde_json::{Value, json};

    fn item(pairs: &[(&str, Value)]) -> Item {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn quiet_options(output_dir: std::path::PathBuf) -> FinalizeOptions {
        FinalizeOptions {
            emit_text: true,
            emit_structured: true,
            print_summary: false,
            output_dir,
            render: RenderConfig::default(),
        }
    }

    #[test]
    fn test_finalize_writes_both_reports() {
        let dir = tempfile::tempdir().unwrap();

        let mut batch = BatchAccumulator::new("wiring");
        batch.record_success(item(&[("name", json!("a"))]));
        batch.record_failed(item(&[("name", json!("b"))]), "nope");
        let end = batch.start_time + Duration::seconds(2);

        let outcome = finalize_at(batch, end, &quiet_options(dir.path().to_path_buf())).unwrap();

        let text_path = outcome.saved.text.as_ref().unwrap();
        let json_path = outcome.saved.json.as_ref().unwrap();
        assert!(text_path.exists());
        assert!(json_path.exists());
        assert!(text_path.file_name().unwrap().to_str().unwrap().ends_with("_report.txt"));
        assert!(json_path.file_name().unwrap().to_str().unwrap().ends_with("_report.json"));

        assert_eq!(outcome.result.status, BatchStatus::Partial);
        assert_eq!(outcome.result.stats.total_count, 2);
    }

    #[test]
    fn test_emit_flags_are_honored() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = quiet_options(dir.path().to_path_buf());
        options.emit_text = false;
        options.emit_structured = false;

        let batch = BatchAccumulator::new("no_files");
        let end = batch.start_time + Duration::seconds(1);
        let outcome = finalize_at(batch, end, &options).unwrap();

        assert_eq!(outcome.saved.text, None);
        assert_eq!(outcome.saved.json, None);
        // Nothing was written, not even the directory.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_truncate_limit_threads_through_to_text_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = quiet_options(dir.path().to_path_buf());
        options.emit_structured = false;
        options.render = RenderConfig { detail_limit: 2, include_details: true };

        let mut batch = BatchAccumulator::new("truncated");
        for i in 0..5 {
            batch.record_success(item(&[("id", json!(i))]));
        }
        let end = batch.start_time + Duration::seconds(1);
        let outcome = finalize_at(batch, end, &options).unwrap();

        let text = std::fs::read_to_string(outcome.saved.text.unwrap()).unwrap();
        assert!(text.contains("... and 3 more items"));
    }

    #[test]
    fn test_finalize_rejects_end_before_start() {
        let dir = tempfile::tempdir().unwrap();

        let batch = BatchAccumulator::new("backwards");
        let end = batch.start_time - Duration::seconds(30);
        let err = finalize_at(batch, end, &quiet_options(dir.path().to_path_buf())).unwrap_err();

        assert!(matches!(err, ReportError::InvalidTimeRange { .. }));
        // No partial output on failure.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_io_failure_surfaces_with_source_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"file in the way").unwrap();

        let batch = BatchAccumulator::new("io_error");
        let end = batch.start_time + Duration::seconds(1);
        let err = finalize_at(batch, end, &quiet_options(blocked)).unwrap_err();

        match err {
            ReportError::Io(inner) => {
                // The io::Error arrives unmodified.
                let _ = inner.kind();
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
