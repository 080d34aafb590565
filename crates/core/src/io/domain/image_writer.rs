use std::path::Path;

use crate::shared::frame::Frame;

use super::IoError;

/// Encodes a frame to an image file; the format follows the path's extension.
pub trait ImageWriter: Send + Sync {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), IoError>;
}
