pub mod image_reader;
pub mod image_writer;

/// Error type crossing the I/O adapter boundary; `Send + Sync` so it can be
/// reported from worker threads.
pub type IoError = Box<dyn std::error::Error + Send + Sync>;
