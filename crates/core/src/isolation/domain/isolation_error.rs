use thiserror::Error;

use crate::shared::rect::Rect;

/// Per-call validation failures of a [`ShapeIsolator`](super::shape_isolator::ShapeIsolator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsolationError {
    #[error("region {rect} does not fit inside {image_width}x{image_height} image")]
    InvalidRegion {
        rect: Rect,
        image_width: u32,
        image_height: u32,
    },
    #[error("blur kernel size must be a positive odd integer, got {0}")]
    InvalidKernel(usize),
}
