pub mod pipeline_factory;
pub mod threaded_batch_executor;
