use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::io::domain::image_reader::ImageReader;
use crate::io::domain::image_writer::ImageWriter;
use crate::isolation::domain::shape_isolator::ShapeIsolator;
use crate::pipeline::batch_config::BatchConfig;
use crate::pipeline::batch_error::{FileError, PipelineError};
use crate::pipeline::batch_executor::BatchExecutor;
use crate::pipeline::batch_report::{report_name, BatchReport, FileOutcome, FileReport};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::constants::{
    is_image_extension, EDGES_SUFFIX, GRAY_SUFFIX, MASK_SUFFIX, ROI_SUFFIX,
};
use crate::shared::frame::Frame;

/// Directory batch: enumerate → decode → isolate/blur → encode, one file at a
/// time from the executor's point of view. A failing file is reported and
/// skipped; only configuration and enumeration problems abort the batch.
pub struct BatchPipeline {
    processor: FileProcessor,
    executor: Box<dyn BatchExecutor>,
    logger: Box<dyn PipelineLogger>,
}

impl BatchPipeline {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        isolator: Box<dyn ShapeIsolator>,
        executor: Box<dyn BatchExecutor>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            processor: FileProcessor {
                reader,
                writer,
                isolator,
            },
            executor,
            logger,
        }
    }

    /// Processes every eligible image in `config.input_dir()`.
    pub fn run(&mut self, config: &BatchConfig) -> Result<BatchReport, PipelineError> {
        let files = list_image_files(config.input_dir())?;
        let total = files.len();

        let processor = &self.processor;
        let logger = &mut self.logger;
        logger.info(&format!(
            "Found {total} image(s) in {}",
            config.input_dir().display()
        ));

        let task = |path: &Path| processor.process(config, path);
        let mut done = 0;
        let reports = self
            .executor
            .execute(&files, &task, &mut |report: &FileReport| {
                done += 1;
                log_report(&mut **logger, report, done, total);
            });

        let report = BatchReport::new(reports);
        logger.info(&format!(
            "Done: {} processed, {} skipped, shape found in {}",
            report.processed_count(),
            report.skipped_count(),
            report.shapes_found()
        ));
        logger.summary();
        Ok(report)
    }
}

struct FileProcessor {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    isolator: Box<dyn ShapeIsolator>,
}

impl FileProcessor {
    fn process(&self, config: &BatchConfig, path: &Path) -> FileReport {
        let mut timings = Vec::new();
        let (outcome, contour_area) = match self.try_process(config, path, &mut timings) {
            Ok(done) => done,
            Err(e) => (
                FileOutcome::Skipped {
                    reason: e.to_string(),
                },
                None,
            ),
        };
        FileReport {
            file_name: report_name(path),
            outcome,
            contour_area,
            timings,
        }
    }

    fn try_process(
        &self,
        config: &BatchConfig,
        path: &Path,
        timings: &mut Vec<(&'static str, f64)>,
    ) -> Result<(FileOutcome, Option<f64>), FileError> {
        let frame =
            timed(timings, "decode", || self.reader.read(path)).map_err(FileError::Decode)?;

        let isolation = timed(timings, "isolate", || {
            self.isolator.isolate(
                &frame,
                &config.rect(),
                config.kernel_size().get(),
                config.debug(),
            )
        })?;
        let shape_found = isolation.shape_found();
        let contour_area = isolation.largest_area;

        let file_name = path.file_name().unwrap_or(path.as_os_str());
        let output_dir = config.output_dir();

        let outcome = timed(timings, "encode", || -> Result<FileOutcome, FileError> {
            self.write(&output_dir.join(file_name), &isolation.result)?;

            let Some(debug) = &isolation.debug else {
                return Ok(FileOutcome::Processed { shape_found });
            };
            for (suffix, image) in [
                (GRAY_SUFFIX, &debug.gray),
                (EDGES_SUFFIX, &debug.edges),
                (ROI_SUFFIX, &debug.roi),
                (MASK_SUFFIX, &debug.mask),
            ] {
                self.write(&debug_output_path(output_dir, file_name, suffix), image)?;
            }
            Ok(FileOutcome::ProcessedWithDebug { shape_found })
        })?;
        Ok((outcome, contour_area))
    }

    fn write(&self, path: &Path, frame: &Frame) -> Result<(), FileError> {
        self.writer
            .write(path, frame)
            .map_err(|source| FileError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn timed<T>(
    timings: &mut Vec<(&'static str, f64)>,
    stage: &'static str,
    f: impl FnOnce() -> T,
) -> T {
    let start = Instant::now();
    let value = f();
    timings.push((stage, start.elapsed().as_secs_f64() * 1000.0));
    value
}

fn log_report(logger: &mut dyn PipelineLogger, report: &FileReport, done: usize, total: usize) {
    logger.progress(done, total);
    for (stage, ms) in &report.timings {
        logger.timing(stage, *ms);
    }
    if let Some(area) = report.contour_area {
        logger.metric("contour_area", area);
    }
    let name = &report.file_name;
    match &report.outcome {
        FileOutcome::Processed { shape_found } => {
            logger.info(&format!("[{done}/{total}] {name}: processed{}", note(*shape_found)));
        }
        FileOutcome::ProcessedWithDebug { shape_found } => {
            logger.info(&format!(
                "[{done}/{total}] {name}: processed with debug artifacts{}",
                note(*shape_found)
            ));
        }
        FileOutcome::Skipped { reason } => {
            logger.warn(&format!("[{done}/{total}] {name}: skipped: {reason}"));
        }
    }
}

fn note(shape_found: bool) -> &'static str {
    if shape_found {
        ""
    } else {
        " (no shape found, region left unchanged)"
    }
}

/// Regular files directly inside `dir` with an allow-listed extension,
/// sorted by path. Subdirectories are not searched.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = std::fs::read_dir(dir).map_err(|source| PipelineError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(OsStr::to_str)
                .is_some_and(is_image_extension)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(PipelineError::NoInputFiles(dir.to_path_buf()));
    }
    Ok(files)
}

/// `<dir>/<stem><suffix>.<ext>`, keeping the input's extension as written.
pub fn debug_output_path(dir: &Path, file_name: &OsStr, suffix: &str) -> PathBuf {
    let name = Path::new(file_name);
    let mut out = name.file_stem().unwrap_or(file_name).to_os_string();
    out.push(suffix);
    if let Some(ext) = name.extension() {
        out.push(".");
        out.push(ext);
    }
    dir.join(out)
}
