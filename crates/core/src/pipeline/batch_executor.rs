use std::path::{Path, PathBuf};

use crate::pipeline::batch_report::FileReport;

/// Work applied to one input file. Never fails: errors become a skipped report.
///
/// The task may borrow from the caller; executors only run it for the
/// duration of `execute`.
pub type FileTask<'a> = dyn Fn(&Path) -> FileReport + Send + Sync + 'a;

/// Abstracts how the per-file work of a batch is scheduled.
///
/// This is a port: infrastructure provides concrete strategies
/// (sequential, worker pool). `on_report` is invoked on the calling thread
/// as each file finishes, so progress can be logged while the batch runs.
pub trait BatchExecutor: Send + Sync {
    fn execute(
        &self,
        files: &[PathBuf],
        task: &FileTask<'_>,
        on_report: &mut dyn FnMut(&FileReport),
    ) -> Vec<FileReport>;
}

/// Processes files one at a time, in the order given.
pub struct SequentialBatchExecutor;

impl BatchExecutor for SequentialBatchExecutor {
    fn execute(
        &self,
        files: &[PathBuf],
        task: &FileTask<'_>,
        on_report: &mut dyn FnMut(&FileReport),
    ) -> Vec<FileReport> {
        files
            .iter()
            .map(|path| {
                let report = task(path);
                on_report(&report);
                report
            })
            .collect()
    }
}
