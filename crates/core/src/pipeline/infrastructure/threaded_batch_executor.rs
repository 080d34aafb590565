use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::pipeline::batch_error::FileError;
use crate::pipeline::batch_executor::{BatchExecutor, FileTask};
use crate::pipeline::batch_report::{report_name, FileReport};

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

/// Processes files on a fixed pool of worker threads.
///
/// Layout: `paths → N workers [decode/isolate/encode] → caller`
///
/// Files are independent, so workers pull from a shared queue and send
/// finished reports back to the calling thread. The returned reports are
/// sorted by file name so output does not depend on scheduling.
pub struct ThreadedBatchExecutor {
    workers: usize,
    channel_capacity: usize,
}

impl ThreadedBatchExecutor {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl BatchExecutor for ThreadedBatchExecutor {
    fn execute(
        &self,
        files: &[PathBuf],
        task: &FileTask<'_>,
        on_report: &mut dyn FnMut(&FileReport),
    ) -> Vec<FileReport> {
        let workers = self.workers.min(files.len()).max(1);

        let (path_tx, path_rx) = crossbeam_channel::unbounded::<&Path>();
        for path in files {
            // Receiver is alive, so an unbounded send cannot fail.
            let _ = path_tx.send(path.as_path());
        }
        drop(path_tx);

        let (report_tx, report_rx) =
            crossbeam_channel::bounded::<FileReport>(self.channel_capacity);
        let mut reports = Vec::with_capacity(files.len());

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let path_rx = path_rx.clone();
                    let report_tx = report_tx.clone();
                    scope.spawn(move || {
                        for path in path_rx {
                            if report_tx.send(task(path)).is_err() {
                                break;
                            }
                        }
                    })
                })
                .collect();
            drop(report_tx);

            for report in report_rx {
                on_report(&report);
                reports.push(report);
            }

            for handle in handles {
                if handle.join().is_err() {
                    log::error!("Batch worker thread panicked");
                }
            }
        });

        let reported: HashSet<String> = reports.iter().map(|r| r.file_name.clone()).collect();
        for path in files {
            let name = report_name(path);
            if !reported.contains(&name) {
                let report = FileReport::skipped(name, FileError::Join.to_string());
                on_report(&report);
                reports.push(report);
            }
        }

        reports.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        reports
    }
}
