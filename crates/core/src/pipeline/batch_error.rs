use std::path::PathBuf;

use thiserror::Error;

use crate::io::domain::IoError;
use crate::isolation::domain::isolation_error::IsolationError;
use crate::pipeline::batch_config::ConfigError;

/// Errors that abort a whole batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no image files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("failed to list input directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors confined to one file; the batch records them and moves on.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not decode image: {0}")]
    Decode(#[source] IoError),

    #[error(transparent)]
    Isolation(#[from] IsolationError),

    #[error("could not write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("worker thread stopped before finishing this file")]
    Join,
}
