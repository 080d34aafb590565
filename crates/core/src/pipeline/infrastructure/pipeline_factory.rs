use crate::io::infrastructure::image_file_reader::ImageFileReader;
use crate::io::infrastructure::image_file_writer::ImageFileWriter;
use crate::isolation::infrastructure::cpu_shape_isolator::CpuShapeIsolator;
use crate::pipeline::batch_executor::{BatchExecutor, SequentialBatchExecutor};
use crate::pipeline::batch_pipeline::BatchPipeline;
use crate::pipeline::pipeline_logger::PipelineLogger;

use super::threaded_batch_executor::ThreadedBatchExecutor;

/// Wires the file-based adapters and the CPU isolator into a batch pipeline.
pub fn create_pipeline(jobs: usize, logger: Box<dyn PipelineLogger>) -> BatchPipeline {
    BatchPipeline::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(CpuShapeIsolator::new()),
        create_executor(jobs),
        logger,
    )
}

/// Picks the scheduling strategy for a batch. One job runs in the calling
/// thread; more jobs use a worker pool of that size.
pub fn create_executor(jobs: usize) -> Box<dyn BatchExecutor> {
    if jobs > 1 {
        log::info!("Processing with {jobs} worker threads");
        Box::new(ThreadedBatchExecutor::new(jobs))
    } else {
        log::info!("Processing sequentially");
        Box::new(SequentialBatchExecutor)
    }
}
