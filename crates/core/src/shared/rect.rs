use std::fmt;

/// Axis-aligned region of interest in pixel coordinates.
///
/// Construction through [`Rect::from_signed`] enforces non-negative origin and
/// positive size; containment within a particular image is checked separately
/// with [`Rect::fits_within`] because images in one batch may differ in size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from raw `(x, y, width, height)` values.
    ///
    /// Returns `None` for a negative origin, a non-positive size, or values
    /// that do not fit in `u32`.
    pub fn from_signed(x: i64, y: i64, width: i64, height: i64) -> Option<Self> {
        if x < 0 || y < 0 || width <= 0 || height <= 0 {
            return None;
        }
        Some(Self {
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
            width: u32::try_from(width).ok()?,
            height: u32::try_from(height).ok()?,
        })
    }

    /// True when the rectangle is non-empty and lies entirely inside an
    /// image of the given dimensions.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.right() <= u64::from(image_width)
            && self.bottom() <= u64::from(image_height)
    }

    /// Exclusive right edge; widened so `x + width` cannot overflow.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && py >= self.y
            && u64::from(px) < self.right()
            && u64::from(py) < self.bottom()
    }

    pub(crate) fn as_usize(&self) -> (usize, usize, usize, usize) {
        (
            self.x as usize,
            self.y as usize,
            self.width as usize,
            self.height as usize,
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x={}, y={}, w={}, h={})",
            self.x, self.y, self.width, self.height
        )
    }
}
