use image::{GrayImage, RgbImage};
use ndarray::{s, ArrayView3, ArrayViewMut3};

use crate::shared::rect::Rect;

/// An image buffer: contiguous bytes in row-major order, one or three channels.
///
/// Format conversion happens at I/O boundaries only; every transformation in
/// the isolation pipeline produces a new `Frame` rather than mutating a shared one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    pub fn from_rgb_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(img.into_raw(), width, height, 3)
    }

    pub fn from_gray_image(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(img.into_raw(), width, height, 1)
    }

    /// Single-channel view as an `image` buffer, or `None` for colour frames.
    pub fn to_gray_image(&self) -> Option<GrayImage> {
        if self.channels != 1 {
            return None;
        }
        GrayImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of distinct byte values across the whole buffer.
    pub fn distinct_values(&self) -> usize {
        let mut seen = [false; 256];
        for &v in &self.data {
            seen[v as usize] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Copies the pixels under `rect` into a new frame.
    ///
    /// The caller guarantees `rect` lies inside the frame.
    pub fn crop(&self, rect: &Rect) -> Frame {
        let (x, y, w, h) = rect.as_usize();
        let data: Vec<u8> = self
            .as_ndarray()
            .slice(s![y..y + h, x..x + w, ..])
            .iter()
            .copied()
            .collect();
        Frame::new(data, rect.width, rect.height, self.channels)
    }

    /// Overwrites the pixels at `(rect.x, rect.y)` with `patch`.
    ///
    /// `patch` must have the rectangle's dimensions and this frame's channel count.
    pub fn paste(&mut self, patch: &Frame, rect: &Rect) {
        debug_assert_eq!((patch.width, patch.height), (rect.width, rect.height));
        debug_assert_eq!(patch.channels, self.channels);
        let (x, y, w, h) = rect.as_usize();
        self.as_ndarray_mut()
            .slice_mut(s![y..y + h, x..x + w, ..])
            .assign(&patch.as_ndarray());
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
