use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for batch orchestration events.
///
/// Decouples the batch use case from specific output mechanisms so callers
/// can observe progress without changing the orchestration code.
pub trait PipelineLogger: Send {
    /// Report file-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named stage took for one file.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a per-file measurement, such as the blurred shape's contour area.
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Log a recoverable problem, such as a skipped file.
    fn warn(&mut self, message: &str);

    /// Emit an end-of-batch summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests and library callers
/// that only want the returned report.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
    fn warn(&mut self, _message: &str) {}
}

/// CLI-oriented logger that forwards messages to the `log` facade, tracks
/// per-stage timing and metrics, and renders a summary at the end.
pub struct LogPipelineLogger {
    timings: HashMap<String, Vec<f64>>,
    metrics: HashMap<String, Vec<f64>>,
    start_time: Instant,
    total_files: usize,
    warnings: usize,
}

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
            total_files: 0,
            warnings: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let files = self.total_files;
        let mut lines = Vec::new();

        lines.push(format!(
            "Batch summary ({files} files, {:.1}s total):",
            elapsed_ms / 1000.0
        ));

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:6.1}ms  total {total_ms:7.0}ms"
            ));
        }

        let mut metric_names: Vec<_> = self.metrics.keys().collect();
        metric_names.sort();
        for name in metric_names {
            let values = &self.metrics[name];
            let avg = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            lines.push(format!("  {name}: avg {avg:.1}"));
        }

        if self.warnings > 0 {
            lines.push(format!("  Skipped: {}", self.warnings));
        }

        if files > 0 && elapsed_ms > 0.0 {
            let rate = files as f64 / (elapsed_ms / 1000.0);
            lines.push(format!("  Throughput: {rate:.1} files/s"));
        }

        Some(lines.join("\n"))
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_files = total;
        if total > 0 {
            log::debug!("Progress: {current}/{total} files");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&mut self, message: &str) {
        self.warnings += 1;
        log::warn!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
