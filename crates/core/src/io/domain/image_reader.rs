use std::path::Path;

use crate::shared::frame::Frame;

use super::IoError;

/// Decodes an image file into a frame.
pub trait ImageReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Frame, IoError>;
}
