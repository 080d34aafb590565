pub mod batch_config;
pub mod batch_error;
pub mod batch_executor;
pub mod batch_pipeline;
pub mod batch_report;
pub mod infrastructure;
pub mod pipeline_logger;

use std::path::Path;

use batch_config::BatchConfig;
use batch_error::PipelineError;
use batch_report::BatchReport;
use infrastructure::pipeline_factory::create_pipeline;
use pipeline_logger::LogPipelineLogger;

/// Validates the settings, then processes every image in `input_dir` with
/// `jobs` workers (1 = sequential), writing results into `output_dir`.
///
/// Configuration problems and an input directory without images are
/// returned as errors before any output is written. Per-file failures are
/// logged and recorded in the report.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    rect: &[i64],
    kernel_size: i64,
    debug: bool,
    jobs: usize,
) -> Result<BatchReport, PipelineError> {
    let config =
        BatchConfig::new(input_dir, output_dir, rect, kernel_size, debug)?.with_jobs(jobs);

    log::info!(
        "Region {}, blur kernel {}{}",
        config.rect(),
        config.kernel_size().get(),
        if config.debug() { ", debug output on" } else { "" }
    );

    create_pipeline(config.jobs(), Box::new(LogPipelineLogger::new())).run(&config)
}
