use image::GrayImage;
use ndarray::{ArrayView2, Axis, Zip};

use crate::isolation::domain::isolation::{DebugArtifacts, Isolation};
use crate::isolation::domain::isolation_error::IsolationError;
use crate::isolation::domain::shape_isolator::ShapeIsolator;
use crate::shared::frame::Frame;
use crate::shared::kernel_size::BlurKernelSize;
use crate::shared::rect::Rect;

use super::contours::{self, ShapeContour};
use super::edges;
use super::gaussian;

/// Regions thinner than this cannot enclose a contour and skip detection.
const MIN_DETECTABLE_SIDE: u32 = 3;

/// CPU shape isolator: edge map → largest external contour → filled mask →
/// Gaussian-blurred ROI composited through the mask.
///
/// Stateless; one instance can serve any number of threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuShapeIsolator;

impl CpuShapeIsolator {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeIsolator for CpuShapeIsolator {
    fn isolate(
        &self,
        image: &Frame,
        rect: &Rect,
        kernel_size: usize,
        debug: bool,
    ) -> Result<Isolation, IsolationError> {
        if !rect.fits_within(image.width(), image.height()) {
            return Err(IsolationError::InvalidRegion {
                rect: *rect,
                image_width: image.width(),
                image_height: image.height(),
            });
        }
        if !BlurKernelSize::is_valid(kernel_size) {
            return Err(IsolationError::InvalidKernel(kernel_size));
        }

        let roi = image.crop(rect);
        let gray = edges::to_grayscale(&roi);
        let too_thin = rect.width < MIN_DETECTABLE_SIDE || rect.height < MIN_DETECTABLE_SIDE;
        let (edge_map, largest) = if too_thin {
            (GrayImage::new(rect.width, rect.height), None)
        } else {
            let edge_map = edges::edge_map(&gray);
            let largest = contours::select_largest(contours::external_contours(&edge_map));
            (edge_map, largest)
        };

        let mut result = image.clone();
        let mask = match &largest {
            Some(shape) => {
                log::debug!("Largest contour area {:.1} in {}", shape.area, rect);
                let mask = contours::fill_contour(rect.width, rect.height, shape);
                let blurred = blur_frame(&roi, kernel_size);
                result.paste(&composite(&roi, &blurred, &mask), rect);
                mask
            }
            None => {
                log::debug!("No shape found in {}", rect);
                GrayImage::new(rect.width, rect.height)
            }
        };

        let debug = debug.then(|| DebugArtifacts {
            gray: Frame::from_gray_image(gray),
            edges: Frame::from_gray_image(edge_map),
            roi,
            mask: Frame::from_gray_image(mask),
        });

        Ok(Isolation {
            result,
            largest_area: largest.map(|ShapeContour { area, .. }| area),
            debug,
        })
    }
}

fn blur_frame(frame: &Frame, kernel_size: usize) -> Frame {
    let data = gaussian::gaussian_blur(
        frame.data(),
        frame.width() as usize,
        frame.height() as usize,
        frame.channels() as usize,
        kernel_size,
    );
    Frame::new(data, frame.width(), frame.height(), frame.channels())
}

/// Takes `blurred` where the mask is set and `original` elsewhere.
fn composite(original: &Frame, blurred: &Frame, mask: &GrayImage) -> Frame {
    let mut out = original.clone();
    let shape = (original.height() as usize, original.width() as usize);
    let mask_view = ArrayView2::from_shape(shape, mask.as_raw().as_slice())
        .expect("mask must have the ROI's dimensions");
    let blurred_view = blurred.as_ndarray();
    let mut out_view = out.as_ndarray_mut();
    Zip::from(out_view.lanes_mut(Axis(2)))
        .and(blurred_view.lanes(Axis(2)))
        .and(&mask_view)
        .for_each(|mut dst, src, &m| {
            if m != 0 {
                dst.assign(&src);
            }
        });
    out
}
