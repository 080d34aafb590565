use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

pub const MASK_ON: u8 = 255;

/// A closed outer boundary traced from a binary edge map.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeContour {
    pub points: Vec<Point<i32>>,
    pub area: f64,
}

/// Traces outer borders that are not nested inside another border.
///
/// Order follows the raster scan of the tracer, so it is stable for a given
/// edge map.
pub fn external_contours(edges: &GrayImage) -> Vec<ShapeContour> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| {
            let area = polygon_area(&c.points);
            ShapeContour {
                points: c.points,
                area,
            }
        })
        .collect()
}

/// Enclosed area of a closed polygon (shoelace formula), independent of winding.
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
        .sum();
    twice.abs() as f64 / 2.0
}

/// Picks the contour with the largest area; ties keep the earliest one.
pub fn select_largest(contours: Vec<ShapeContour>) -> Option<ShapeContour> {
    let mut best: Option<ShapeContour> = None;
    for c in contours {
        match &best {
            Some(b) if c.area <= b.area => {}
            _ => best = Some(c),
        }
    }
    best
}

/// Renders the contour's interior and boundary as `MASK_ON` on a zeroed mask.
pub fn fill_contour(width: u32, height: u32, contour: &ShapeContour) -> GrayImage {
    let mut mask = GrayImage::new(width, height);

    let mut polygon: &[Point<i32>] = &contour.points;
    while polygon.len() > 1 && polygon[0] == polygon[polygon.len() - 1] {
        polygon = &polygon[..polygon.len() - 1];
    }
    if polygon.len() >= 3 {
        imageproc::drawing::draw_polygon_mut(&mut mask, polygon, Luma([MASK_ON]));
    }

    for p in &contour.points {
        if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
            mask.put_pixel(p.x as u32, p.y as u32, Luma([MASK_ON]));
        }
    }
    mask
}
