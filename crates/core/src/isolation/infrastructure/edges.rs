use image::GrayImage;
use imageproc::distance_transform::Norm;

use crate::shared::frame::Frame;

use super::gaussian;

/// Window of the noise-suppressing blur applied before edge detection.
/// Independent of the caller's blur kernel.
pub const PRESMOOTH_KERNEL: usize = 5;

/// Hysteresis thresholds on the L2 Sobel magnitude. A full-contrast step edge
/// peaks around 430 after both smoothing passes, so only strong edges seed.
pub const CANNY_LOW_THRESHOLD: f32 = 100.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 300.0;

/// Closing passes with a 3x3 square element. Under the L-infinity norm this is
/// a single closing of radius `CLOSING_ITERATIONS`.
pub const CLOSING_ITERATIONS: u8 = 3;

// BT.601 luma weights in 14-bit fixed point; they sum to 1 << 14.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Converts a frame to single-channel luminance. Gray frames are copied as-is.
pub fn to_grayscale(frame: &Frame) -> GrayImage {
    let (w, h) = (frame.width(), frame.height());
    if frame.channels() == 1 {
        return GrayImage::from_raw(w, h, frame.data().to_vec())
            .unwrap_or_else(|| GrayImage::new(w, h));
    }
    let channels = frame.channels() as usize;
    let luma: Vec<u8> = frame
        .data()
        .chunks_exact(channels)
        .map(|px| {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            let weighted = r * LUMA_R + g * LUMA_G + b * LUMA_B + (1 << (LUMA_SHIFT - 1));
            (weighted >> LUMA_SHIFT) as u8
        })
        .collect();
    GrayImage::from_raw(w, h, luma).unwrap_or_else(|| GrayImage::new(w, h))
}

pub fn smooth(gray: &GrayImage) -> GrayImage {
    let (w, h) = gray.dimensions();
    let data = gaussian::gaussian_blur(
        gray.as_raw(),
        w as usize,
        h as usize,
        1,
        PRESMOOTH_KERNEL,
    );
    GrayImage::from_raw(w, h, data).unwrap_or_else(|| GrayImage::new(w, h))
}

/// Canny edges: 255 on an edge, 0 elsewhere.
pub fn detect_edges(smoothed: &GrayImage) -> GrayImage {
    imageproc::edges::canny(smoothed, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD)
}

/// Dilate-then-erode so nearly-touching edge fragments form closed boundaries.
pub fn close_edges(edges: &GrayImage) -> GrayImage {
    imageproc::morphology::close(edges, Norm::LInf, CLOSING_ITERATIONS)
}

/// Full edge-map stage: smoothing, Canny, closing.
pub fn edge_map(gray: &GrayImage) -> GrayImage {
    close_edges(&detect_edges(&smooth(gray)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn filled_square(size: u32, start: u32, end: u32) -> GrayImage {
        GrayImage::from_fn(size, size, |x, y| {
            if (start..end).contains(&x) && (start..end).contains(&y) {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }

    #[test]
    fn test_grayscale_weights() {
        let frame = Frame::new(vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255], 4, 1, 3);
        let gray = to_grayscale(&frame);
        assert_eq!(gray.as_raw(), &vec![76, 150, 29, 255]);
    }

    #[test]
    fn test_grayscale_passthrough_for_single_channel() {
        let frame = Frame::new(vec![1, 2, 3, 4], 2, 2, 1);
        assert_eq!(to_grayscale(&frame).as_raw(), &vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_uniform_region_has_no_edges() {
        let gray = GrayImage::from_pixel(40, 30, Luma([90]));
        let edges = edge_map(&gray);
        assert!(edges.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_square_produces_edges_on_its_border() {
        let gray = filled_square(60, 15, 45);
        let edges = detect_edges(&smooth(&gray));
        let on_border = (15..45).filter(|&y| (12..18).any(|x| edges.get_pixel(x, y)[0] == 255));
        assert!(on_border.count() > 20);
        // Deep interior and far background stay clear.
        assert_eq!(edges.get_pixel(30, 30)[0], 0);
        assert_eq!(edges.get_pixel(2, 2)[0], 0);
    }

    #[test]
    fn test_edges_are_binary() {
        let edges = edge_map(&filled_square(50, 10, 40));
        assert!(edges.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn test_closing_bridges_small_gap() {
        let mut edges = GrayImage::new(30, 5);
        for x in 2..28 {
            if !(14..17).contains(&x) {
                edges.put_pixel(x, 2, Luma([255]));
            }
        }
        let closed = close_edges(&edges);
        assert!((14..17).all(|x| closed.get_pixel(x, 2)[0] == 255));
    }

    #[test]
    fn test_edge_map_is_deterministic() {
        let gray = filled_square(50, 12, 33);
        assert_eq!(edge_map(&gray), edge_map(&gray));
    }
}
