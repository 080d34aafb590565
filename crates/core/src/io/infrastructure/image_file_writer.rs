use std::path::Path;

use image::ExtendedColorType;

use crate::io::domain::image_writer::ImageWriter;
use crate::io::domain::IoError;
use crate::shared::frame::Frame;

/// Writes frames with the `image` crate. One-channel frames are saved as
/// 8-bit grayscale, three-channel frames as RGB.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), IoError> {
        let color = match frame.channels() {
            1 => ExtendedColorType::L8,
            3 => ExtendedColorType::Rgb8,
            n => return Err(format!("unsupported channel count: {n}").into()),
        };
        image::save_buffer(path, frame.data(), frame.width(), frame.height(), color)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame(width: u32, height: u32, r: u8, g: u8, b: u8) -> Frame {
        let data = [r, g, b].repeat((width * height) as usize);
        Frame::new(data, width, height, 3)
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new()
            .write(&path, &make_frame(100, 80, 50, 100, 200))
            .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new()
            .write(&path, &make_frame(50, 50, 50, 100, 200))
            .unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (50, 50));
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200]);
    }

    #[test]
    fn test_single_channel_saved_as_gray() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        let frame = Frame::new(vec![0, 255, 255, 0], 2, 2, 1);
        ImageFileWriter::new().write(&path, &frame).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::L8);
        assert_eq!(img.to_luma8().into_raw(), vec![0, 255, 255, 0]);
    }

    #[test]
    fn test_jpeg_output_keeps_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        ImageFileWriter::new()
            .write(&path, &make_frame(40, 30, 10, 20, 30))
            .unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 40);
    }

    #[test]
    fn test_write_invalid_path_returns_error() {
        let frame = make_frame(10, 10, 0, 0, 0);
        assert!(ImageFileWriter::new()
            .write(Path::new("/nonexistent/dir/out.png"), &frame)
            .is_err());
    }

    #[test]
    fn test_unsupported_channel_count() {
        let dir = tempfile::tempdir().unwrap();
        let frame = Frame::new(vec![0; 8], 2, 1, 4);
        assert!(ImageFileWriter::new()
            .write(&dir.path().join("x.png"), &frame)
            .is_err());
    }
}
