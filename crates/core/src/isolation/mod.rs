pub mod domain;
pub mod infrastructure;

use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

use domain::isolation::Isolation;
use domain::isolation_error::IsolationError;
use domain::shape_isolator::ShapeIsolator;
use infrastructure::cpu_shape_isolator::CpuShapeIsolator;

/// Blurs the interior of the largest closed shape found inside `rect`.
///
/// Shorthand for [`CpuShapeIsolator`]; see [`ShapeIsolator::isolate`].
pub fn isolate_and_blur(
    image: &Frame,
    rect: &Rect,
    kernel_size: usize,
    debug: bool,
) -> Result<Isolation, IsolationError> {
    CpuShapeIsolator::new().isolate(image, rect, kernel_size, debug)
}
