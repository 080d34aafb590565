use std::path::Path;

use crate::io::domain::image_reader::ImageReader;
use crate::io::domain::IoError;
use crate::shared::frame::Frame;

/// Reads image files with the `image` crate.
///
/// Every input is normalised to 3-channel RGB: grayscale inputs are expanded
/// and alpha is dropped, so the isolator always sees colour frames.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, IoError> {
        let img = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?;
        let frame = Frame::from_rgb_image(img.to_rgb8());
        if frame.is_empty() {
            return Err(format!("image has no pixels: {}", path.display()).into());
        }
        Ok(frame)
    }
}
