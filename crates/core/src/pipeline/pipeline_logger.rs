use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting observer for caption batch runs.
///
/// Decouples the use case and executor from a specific output mechanism
/// (stdout, log crate, embedding application) so callers can watch
/// progress without changing the orchestration code.
pub trait PipelineLogger: Send {
    /// Report file-level progress.
    fn progress(&mut self, done: usize, total: usize);

    /// Record how long a named stage took for one file.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-batch summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used in tests and by embedders
/// with their own progress reporting.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _done: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tracks per-stage timings and reports a
/// summary when the batch completes.
pub struct StdoutPipelineLogger {
    timings: HashMap<String, Vec<f64>>,
    start_time: Instant,
    total_files: usize,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            start_time: Instant::now(),
            total_files: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Batch summary ({} files, {:.1}s total):",
            self.total_files,
            elapsed_ms / 1000.0
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = total_ms / durations.len() as f64;
            let pct = if elapsed_ms > 0.0 {
                total_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:7.1}ms  total {total_ms:8.0}ms  ({pct:4.1}%)"
            ));
        }

        Some(lines.join("\n"))
    }

    /// Returns the timing data for a given stage.
    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, done: usize, total: usize) {
        self.total_files = total;
        log::info!("Processed {done}/{total} files");
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 10);
        logger.timing("transcribe", 5.0);
        logger.info("hello");
        logger.summary();
        // No panics = success
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = StdoutPipelineLogger::new();
        logger.timing("transcribe", 20.0);
        logger.timing("transcribe", 30.0);
        logger.timing("extract", 5.0);

        let transcribe = logger.timings_for("transcribe").unwrap();
        assert_eq!(transcribe.len(), 2);
        assert!((transcribe[0] - 20.0).abs() < f64::EPSILON);

        let extract = logger.timings_for("extract").unwrap();
        assert_eq!(extract.len(), 1);
    }

    #[test]
    fn test_summary_includes_stages_and_file_count() {
        let mut logger = StdoutPipelineLogger::new();
        logger.progress(3, 3);
        logger.timing("transcribe", 20.0);
        logger.timing("write", 1.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Batch summary"));
        assert!(summary.contains("3 files"));
        assert!(summary.contains("transcribe"));
        assert!(summary.contains("write"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutPipelineLogger::new();
        assert!(logger.summary_string().is_none());
    }
}
